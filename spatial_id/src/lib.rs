//! # Spatial ID
//!
//! Hierarchical three-dimensional tile identifiers for any point on Earth plus altitude.
//!
//! A [`Tile`] bundles one tile address `(z, f, x, y)` with everything derived from it:
//! the canonical path string, the tilehash, the center point, and the bounding box.
//! Navigation returns new tiles; a tile never changes after construction.
//!
//! ## Usage Example
//!
//! ```rust
//! use spatial_id::{Tile, core::GeoPoint};
//!
//! let tile = Tile::from_geo_point(&GeoPoint::new(139.767125, 35.681236, 10.0), 18).unwrap();
//! assert_eq!(tile.path(), "/18/0/232847/103226");
//! assert_eq!(tile.tilehash(), "244113223421334242");
//!
//! let same: Tile = "244113223421334242".parse().unwrap();
//! assert_eq!(same, tile);
//! assert_eq!(tile.east(1).unwrap().path(), "/18/0/232848/103226");
//! ```

pub mod config;

mod payload;
pub use payload::*;

mod tile;
pub use tile::*;

pub use spatial_id_core as core;
pub use spatial_id_geometry as geometry;
