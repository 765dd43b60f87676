//! Core arithmetic for hierarchical three-dimensional spatial tile identifiers.
//!
//! A tile is addressed by `(z, f, x, y)`: zoom level, signed floor, and the horizontal
//! Web Mercator grid indices. This crate converts between geographic points and tile
//! addresses, navigates the 8-ary tile tree, and encodes addresses as tilehash strings.
//!
//! ```
//! use spatial_id_core::{GeoPoint, TileAddress};
//!
//! let point = GeoPoint::new(139.767125, 35.681236, 10.0);
//! let address = TileAddress::from_geo_point(&point, 18).unwrap();
//! assert_eq!(address.to_path(), "/18/0/232847/103226");
//! assert_eq!(address.to_tilehash().unwrap(), "244113223421334242");
//! ```

mod error;
pub use error::*;

mod navigation;
pub use navigation::*;

mod projection;
pub use projection::*;

pub mod slippy;

mod tilehash;
pub use tilehash::*;

pub mod types;
pub use types::*;
