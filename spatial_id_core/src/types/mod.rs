//! Value types: tile addresses, geographic points and bounding boxes.

mod constants;
pub use constants::*;

mod geo_bbox;
pub use geo_bbox::*;

mod geo_point;
pub use geo_point::*;

mod tile_address;
pub use tile_address::*;
