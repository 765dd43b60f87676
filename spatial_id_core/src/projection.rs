//! Conversion between geographic points and tile addresses.
//!
//! Horizontally this is the standard Web Mercator tiling. Vertically the grid is split
//! into floors whose height halves with every zoom step, matching the horizontal
//! doubling: one floor is [`BASE_FLOOR_HEIGHT`] meters at [`BASE_ZOOM`].

use crate::{BASE_FLOOR_HEIGHT, BASE_ZOOM, GeoBBox, GeoPoint, MAX_ZOOM, TileAddress, TileError};
use anyhow::{Result, ensure};
use std::f64::consts::PI;

/// Height in meters of a single floor at zoom level `z`.
///
/// ```
/// use spatial_id_core::floor_height;
///
/// assert_eq!(floor_height(25), 1.0);
/// assert_eq!(floor_height(24), 2.0);
/// assert_eq!(floor_height(26), 0.5);
/// ```
#[must_use]
pub fn floor_height(z: u8) -> f64 {
	BASE_FLOOR_HEIGHT * 2f64.powi(i32::from(BASE_ZOOM) - i32::from(z))
}

/// Floor index containing altitude `alt` (meters) at zoom level `z`.
///
/// # Errors
///
/// Returns [`TileError::InvalidArgument`] if `alt` is not finite or the floor index
/// does not fit into `i64`.
pub fn floor_of(alt: f64, z: u8) -> Result<i64> {
	ensure!(
		alt.is_finite(),
		TileError::InvalidArgument(format!("alt ({alt}) must be finite"))
	);
	let floor = (alt / floor_height(z)).floor();
	ensure!(
		floor.abs() < 2f64.powi(62),
		TileError::InvalidArgument(format!("alt ({alt}) is too far from the reference plane"))
	);
	Ok(floor as i64)
}

/// Wraps a signed column index onto the cyclic longitude axis of zoom `z`.
fn wrap_x(z: u8, x: i64) -> u32 {
	x.rem_euclid(TileAddress::size(z) as i64) as u32
}

/// Applies the grid's wraparound rule to signed coordinates produced by arithmetic.
///
/// - `x` wraps cyclically modulo `2^z`, because longitude is cyclic.
/// - `y` is not wrapped: a row outside `[0, 2^z)` does not exist.
/// - `f` is passed through unchanged; floors extend indefinitely.
///
/// # Errors
///
/// Returns [`TileError::OutOfRange`] if `y` falls outside the grid and
/// [`TileError::InvalidArgument`] if `z > MAX_ZOOM`.
pub fn normalize(z: u8, f: i64, x: i64, y: i64) -> Result<TileAddress> {
	ensure!(
		z <= MAX_ZOOM,
		TileError::InvalidArgument(format!("z ({z}) must be <= {MAX_ZOOM}"))
	);
	ensure!(
		(0..TileAddress::size(z) as i64).contains(&y),
		TileError::OutOfRange(format!("y ({y}) is outside of the grid at zoom {z}"))
	);
	Ok(TileAddress {
		z,
		f,
		x: wrap_x(z, x),
		y: y as u32,
	})
}

fn tile_to_lng(x: f64, n: f64) -> f64 {
	x / n * 360.0 - 180.0
}

fn tile_to_lat(y: f64, n: f64) -> f64 {
	(PI * (1.0 - 2.0 * y / n)).sinh().atan().to_degrees()
}

impl TileAddress {
	/// Finds the tile containing `point` at zoom level `zoom`.
	///
	/// The latitude is clamped to the projection band first. Longitude `180` lands on
	/// column `0`, the same meridian as `-180`.
	///
	/// # Errors
	///
	/// Returns [`TileError::InvalidArgument`] for non-finite or out-of-domain input
	/// (see [`GeoPoint::check`]) or if `zoom > MAX_ZOOM`.
	///
	/// # Examples
	///
	/// ```
	/// use spatial_id_core::{GeoPoint, TileAddress};
	///
	/// let address = TileAddress::from_geo_point(&GeoPoint::new(0.0, 0.0, 0.0), 1).unwrap();
	/// assert_eq!(address, TileAddress::new(1, 0, 1, 1).unwrap());
	/// ```
	pub fn from_geo_point(point: &GeoPoint, zoom: u8) -> Result<TileAddress> {
		ensure!(
			zoom <= MAX_ZOOM,
			TileError::InvalidArgument(format!("zoom ({zoom}) must be <= {MAX_ZOOM}"))
		);
		point.check()?;
		let GeoPoint { lng, lat, alt } = point.clamped();

		let n = TileAddress::size(zoom) as f64;
		let lat_rad = lat.to_radians();
		let x = (n * (lng + 180.0) / 360.0).floor();
		let y = (n * (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0).floor();

		Ok(TileAddress {
			z: zoom,
			f: floor_of(alt, zoom)?,
			x: wrap_x(zoom, x as i64),
			// the clamped band maps inside the grid; guard against rounding at its edges
			y: y.clamp(0.0, n - 1.0) as u32,
		})
	}

	/// The centroid of the tile, including the altitude at the middle of its floor.
	#[must_use]
	pub fn to_center_geo_point(&self) -> GeoPoint {
		let n = TileAddress::size(self.z) as f64;
		GeoPoint {
			lng: tile_to_lng(f64::from(self.x) + 0.5, n),
			lat: tile_to_lat(f64::from(self.y) + 0.5, n),
			alt: (self.f as f64 + 0.5) * floor_height(self.z),
		}
	}

	/// The horizontal footprint of the tile. The floor is ignored.
	#[must_use]
	pub fn to_geo_bbox(&self) -> GeoBBox {
		let n = TileAddress::size(self.z) as f64;
		let x = f64::from(self.x);
		let y = f64::from(self.y);
		GeoBBox {
			x_min: tile_to_lng(x, n),
			y_min: tile_to_lat(y + 1.0, n),
			x_max: tile_to_lng(x + 1.0, n),
			y_max: tile_to_lat(y, n),
		}
	}

	/// Altitude range `[bottom, top)` of the tile's floor, in meters.
	#[must_use]
	pub fn altitude_range(&self) -> (f64, f64) {
		let height = floor_height(self.z);
		let bottom = self.f as f64 * height;
		(bottom, bottom + height)
	}
}
