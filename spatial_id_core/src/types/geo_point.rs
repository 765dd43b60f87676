use crate::{MAX_LAT, MAX_LNG, TileError};
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// A geographic position with altitude.
///
/// - `lng`: longitude in degrees, `[-180, 180]`
/// - `lat`: latitude in degrees; clamped to the projection band before tile math
/// - `alt`: meters above the reference plane, either sign
#[derive(Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
	pub lng: f64,
	pub lat: f64,
	#[serde(default)]
	pub alt: f64,
}

impl GeoPoint {
	#[must_use]
	pub fn new(lng: f64, lat: f64, alt: f64) -> GeoPoint {
		GeoPoint { lng, lat, alt }
	}

	/// Checks that all components are finite and that longitude and latitude are
	/// valid degrees.
	///
	/// # Errors
	///
	/// Returns [`TileError::InvalidArgument`] for NaN, infinite or out-of-domain values.
	pub fn check(&self) -> Result<()> {
		let invalid = |msg: String| TileError::InvalidArgument(msg);
		ensure!(self.lng.is_finite(), invalid(format!("lng ({}) must be finite", self.lng)));
		ensure!(self.lat.is_finite(), invalid(format!("lat ({}) must be finite", self.lat)));
		ensure!(self.alt.is_finite(), invalid(format!("alt ({}) must be finite", self.alt)));
		ensure!(
			(-MAX_LNG..=MAX_LNG).contains(&self.lng),
			invalid(format!("lng ({}) must be within [-180, 180]", self.lng))
		);
		ensure!(
			(-90.0..=90.0).contains(&self.lat),
			invalid(format!("lat ({}) must be within [-90, 90]", self.lat))
		);
		Ok(())
	}

	/// Returns a copy with the latitude clamped to `[-MAX_LAT, MAX_LAT]`.
	#[must_use]
	pub fn clamped(&self) -> GeoPoint {
		GeoPoint {
			lat: self.lat.clamp(-MAX_LAT, MAX_LAT),
			..*self
		}
	}

	#[must_use]
	pub fn as_array(&self) -> [f64; 3] {
		[self.lng, self.lat, self.alt]
	}
}

impl Debug for GeoPoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "GeoPoint({}, {}, {}m)", self.lng, self.lat, self.alt)
	}
}

impl From<[f64; 2]> for GeoPoint {
	fn from(value: [f64; 2]) -> Self {
		GeoPoint::new(value[0], value[1], 0.0)
	}
}

impl From<[f64; 3]> for GeoPoint {
	fn from(value: [f64; 3]) -> Self {
		GeoPoint::new(value[0], value[1], value[2])
	}
}
