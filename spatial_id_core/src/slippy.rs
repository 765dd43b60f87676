//! Flat quadtree ("slippy map") tile math without a vertical axis.
//!
//! Used when only a 2-D geometry is known and a representative tile is needed, e.g. the
//! smallest tile that covers a bounding box.

use crate::{GeoBBox, MAX_LAT, TileError};
use anyhow::{Result, ensure};
use std::f64::consts::PI;
use std::fmt::Debug;

/// Deepest zoom level `bbox_to_tile` descends to unless a smaller cap is given.
pub const DEFAULT_BBOX_MAX_ZOOM: u8 = 28;

/// Padding in degrees applied to zero-width or zero-height boxes.
pub const BBOX_EPSILON: f64 = 1e-9;

/// Corner tiles are computed at this precision.
const PRECISION_ZOOM: u8 = 32;

/// A 2-D tile in the slippy map grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlippyTile {
	pub x: u32,
	pub y: u32,
	pub z: u8,
}

impl SlippyTile {
	pub const ROOT: SlippyTile = SlippyTile { x: 0, y: 0, z: 0 };
}

impl Debug for SlippyTile {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "SlippyTile({}, [{}, {}])", self.z, self.x, self.y)
	}
}

/// Fractional tile position of a point. `x` is wrapped into `[0, 2^z)`, the latitude is
/// clamped to the Web Mercator band first.
pub fn point_to_tile_fraction(lng: f64, lat: f64, z: u8) -> [f64; 2] {
	let sin = lat.clamp(-MAX_LAT, MAX_LAT).to_radians().sin();
	let n = 2f64.powi(i32::from(z));
	let x = n * (lng / 360.0 + 0.5);
	let y = n * (0.5 - 0.25 * ((1.0 + sin) / (1.0 - sin)).ln() / PI);
	[x.rem_euclid(n), y]
}

/// The tile at zoom `z` containing the point.
///
/// # Errors
///
/// [`TileError::InvalidArgument`] for non-finite coordinates or `z > 32`.
pub fn point_to_tile(lng: f64, lat: f64, z: u8) -> Result<SlippyTile> {
	ensure!(
		lng.is_finite() && lat.is_finite(),
		TileError::InvalidArgument(format!("coordinates must be finite, got ({lng}, {lat})"))
	);
	ensure!(
		z <= PRECISION_ZOOM,
		TileError::InvalidArgument(format!("slippy zoom {z} is deeper than {PRECISION_ZOOM}"))
	);

	let [x, y] = point_to_tile_fraction(lng, lat, z);
	let max = ((1u64 << z) - 1) as f64;
	Ok(SlippyTile {
		x: x.floor().clamp(0.0, max) as u32,
		y: y.floor().clamp(0.0, max) as u32,
		z,
	})
}

/// Number of leading bits shared by both corners (given as `[x0, y0, x1, y1]` at zoom 32),
/// capped at [`DEFAULT_BBOX_MAX_ZOOM`].
pub fn bbox_zoom(corners: [u32; 4]) -> u8 {
	let [x0, y0, x1, y1] = corners;
	for z in 0..DEFAULT_BBOX_MAX_ZOOM {
		let mask = 1u32 << (PRECISION_ZOOM - (z + 1));
		if (x0 & mask) != (x1 & mask) || (y0 & mask) != (y1 & mask) {
			return z;
		}
	}
	DEFAULT_BBOX_MAX_ZOOM
}

/// The smallest tile, no deeper than `max_zoom`, that covers the whole box.
///
/// Zero-width or zero-height boxes are padded by [`BBOX_EPSILON`] first. A box that
/// straddles a tile boundary at zoom 1 resolves to the root tile.
pub fn bbox_to_tile(bbox: &GeoBBox, max_zoom: u8) -> Result<SlippyTile> {
	let bbox = bbox.padded(BBOX_EPSILON);
	let min = point_to_tile(bbox.x_min, bbox.y_min, PRECISION_ZOOM)?;
	let max = point_to_tile(bbox.x_max, bbox.y_max, PRECISION_ZOOM)?;

	let z = bbox_zoom([min.x, min.y, max.x, max.y]).min(max_zoom);
	if z == 0 {
		return Ok(SlippyTile::ROOT);
	}

	let shift = PRECISION_ZOOM - z;
	Ok(SlippyTile {
		x: min.x >> shift,
		y: min.y >> shift,
		z,
	})
}
