//! Geometry for spatial tiles: the footprint polygon of a tile, GeoJSON exchange, and
//! intersection tests against arbitrary 2-D geometry.
//!
//! Geometry is represented with the types of the [`geo`] crate. Intersection tests go
//! through the [`PolygonIntersector`] trait so another geometry backend can be plugged in.

mod geojson;
pub use geojson::*;

mod intersect;
pub use intersect::*;

mod polygon;
pub use polygon::*;

pub use geo::{Geometry, Polygon};
