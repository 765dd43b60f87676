use crate::{GeoPoint, MAX_LNG, TileError};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// The horizontal footprint of a tile or geometry, in degrees.
///
/// - `x_min` (west): minimum longitude
/// - `y_min` (south): minimum latitude
/// - `x_max` (east): maximum longitude
/// - `y_max` (north): maximum latitude
///
/// Altitude is not part of a bounding box.
///
/// # Examples
///
/// ```
/// use spatial_id_core::GeoBBox;
///
/// let mut bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
/// bbox.extend(&GeoBBox::new(-12.0, -3.0, 8.0, 6.0).unwrap());
/// assert_eq!(bbox.as_array(), [-12.0, -5.0, 10.0, 6.0]);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoBBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl GeoBBox {
	/// Creates a bounding box from `west, south, east, north`.
	///
	/// # Errors
	///
	/// Returns [`TileError::InvalidArgument`] if a value is not finite, lies outside
	/// the degree range, or if min > max on either axis.
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<GeoBBox> {
		GeoBBox {
			x_min,
			y_min,
			x_max,
			y_max,
		}
		.checked()
	}

	fn checked(self) -> Result<Self> {
		ensure!(
			self.as_array().iter().all(|v| v.is_finite()),
			TileError::InvalidArgument(format!("bbox {self:?} must be finite"))
		);
		ensure!(
			self.x_min >= -MAX_LNG && self.x_max <= MAX_LNG,
			TileError::InvalidArgument(format!("bbox {self:?} exceeds longitude range"))
		);
		ensure!(
			self.y_min >= -90.0 && self.y_max <= 90.0,
			TileError::InvalidArgument(format!("bbox {self:?} exceeds latitude range"))
		);
		ensure!(
			self.x_min <= self.x_max,
			TileError::InvalidArgument(format!("x_min ({}) must be <= x_max ({})", self.x_min, self.x_max))
		);
		ensure!(
			self.y_min <= self.y_max,
			TileError::InvalidArgument(format!("y_min ({}) must be <= y_max ({})", self.y_min, self.y_max))
		);
		Ok(self)
	}

	/// Returns `[west, south, east, north]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}

	#[must_use]
	pub fn width(&self) -> f64 {
		self.x_max - self.x_min
	}

	#[must_use]
	pub fn height(&self) -> f64 {
		self.y_max - self.y_min
	}

	/// Returns `true` if the horizontal position of `point` lies inside or on the edge.
	#[must_use]
	pub fn contains(&self, point: &GeoPoint) -> bool {
		(self.x_min..=self.x_max).contains(&point.lng) && (self.y_min..=self.y_max).contains(&point.lat)
	}

	/// Grows the box to include `other`.
	pub fn extend(&mut self, other: &GeoBBox) {
		self.x_min = self.x_min.min(other.x_min);
		self.y_min = self.y_min.min(other.y_min);
		self.x_max = self.x_max.max(other.x_max);
		self.y_max = self.y_max.max(other.y_max);
	}

	/// Returns a copy where every zero-length side is widened by `epsilon` in both
	/// directions, staying inside the degree range.
	#[must_use]
	pub fn padded(&self, epsilon: f64) -> GeoBBox {
		let mut bbox = *self;
		if bbox.width() <= 0.0 {
			bbox.x_min = (bbox.x_min - epsilon).max(-MAX_LNG);
			bbox.x_max = (bbox.x_max + epsilon).min(MAX_LNG);
		}
		if bbox.height() <= 0.0 {
			bbox.y_min = (bbox.y_min - epsilon).max(-90.0);
			bbox.y_max = (bbox.y_max + epsilon).min(90.0);
		}
		bbox
	}
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "GeoBBox({}, {}, {}, {})", self.x_min, self.y_min, self.x_max, self.y_max)
	}
}

impl TryFrom<[f64; 4]> for GeoBBox {
	type Error = anyhow::Error;

	fn try_from(input: [f64; 4]) -> Result<Self> {
		GeoBBox::new(input[0], input[1], input[2], input[3])
	}
}
