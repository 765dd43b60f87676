//! The `(z, f, x, y)` address of one cell of the three-dimensional tile grid.
//!
//! # Examples
//!
//! ```
//! use spatial_id_core::TileAddress;
//!
//! let address: TileAddress = "/25/3/29825583/13212735".parse().unwrap();
//! assert_eq!(address.z, 25);
//! assert_eq!(address.f, 3);
//! assert_eq!(address.to_string(), "/25/3/29825583/13212735");
//! ```

use crate::{MAX_ZOOM, TileError};
use anyhow::{Result, bail, ensure};
use serde::{Deserialize, Serialize};
use std::{
	cmp::Ordering,
	fmt::{self, Debug, Display},
	str::FromStr,
};

/// A tile address in the three-dimensional grid.
///
/// `x` and `y` are Web Mercator grid indices in `[0, 2^z - 1]`. `f` is the signed
/// floor index; its height in meters depends on `z` (see [`crate::floor_height`]).
///
/// Deserialization goes through [`TileAddress::new`], so out-of-range values are
/// rejected.
#[derive(Eq, PartialEq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTileAddress")]
pub struct TileAddress {
	/// Zoom level.
	pub z: u8,
	/// Floor index, negative below the reference plane.
	pub f: i64,
	/// Column, west to east.
	pub x: u32,
	/// Row, north to south.
	pub y: u32,
}

#[derive(Deserialize)]
struct RawTileAddress {
	z: u8,
	f: i64,
	x: u32,
	y: u32,
}

impl TryFrom<RawTileAddress> for TileAddress {
	type Error = anyhow::Error;

	fn try_from(raw: RawTileAddress) -> Result<Self> {
		TileAddress::new(raw.z, raw.f, raw.x, raw.y)
	}
}

impl TileAddress {
	/// The single tile at zoom level 0.
	pub const ROOT: TileAddress = TileAddress { z: 0, f: 0, x: 0, y: 0 };

	/// Creates a tile address, checking the zoom level and the horizontal range.
	///
	/// # Errors
	///
	/// Returns [`TileError::InvalidArgument`] if `z > MAX_ZOOM` or if `x` or `y` is
	/// not below `2^z`.
	pub fn new(z: u8, f: i64, x: u32, y: u32) -> Result<TileAddress> {
		ensure!(
			z <= MAX_ZOOM,
			TileError::InvalidArgument(format!("z ({z}) must be <= {MAX_ZOOM}"))
		);
		let size = TileAddress::size(z);
		ensure!(
			u64::from(x) < size,
			TileError::InvalidArgument(format!("x ({x}) out of bounds for zoom {z}"))
		);
		ensure!(
			u64::from(y) < size,
			TileError::InvalidArgument(format!("y ({y}) out of bounds for zoom {z}"))
		);
		Ok(TileAddress { z, f, x, y })
	}

	/// Number of tiles along one horizontal axis at zoom `z`, i.e. `2^z`.
	///
	/// Saturates at `u64::MAX` for `z >= 64`; valid addresses never get there.
	#[must_use]
	pub fn size(z: u8) -> u64 {
		1u64.checked_shl(u32::from(z)).unwrap_or(u64::MAX)
	}

	/// The largest valid `x` or `y` for this address' zoom level.
	#[must_use]
	pub fn max_index(&self) -> u32 {
		(TileAddress::size(self.z) - 1) as u32
	}

	/// `true` if the zoom level and the horizontal indices are in range.
	#[must_use]
	pub fn is_valid(&self) -> bool {
		self.z <= MAX_ZOOM && u64::from(self.x) < TileAddress::size(self.z) && u64::from(self.y) < TileAddress::size(self.z)
	}

	/// Canonical path string `/z/f/x/y`.
	#[must_use]
	pub fn to_path(&self) -> String {
		self.to_string()
	}

	/// Parses a path string.
	///
	/// Accepts `z/f/x/y` and the two-dimensional form `z/x/y` (floor 0), each with an
	/// optional leading slash.
	///
	/// # Errors
	///
	/// Returns [`TileError::InvalidFormat`] for a wrong segment count or a segment that
	/// is not an integer, and [`TileError::InvalidArgument`] if the parsed values are
	/// out of range.
	pub fn parse_path(input: &str) -> Result<TileAddress> {
		let trimmed = input.trim();
		let path = trimmed.strip_prefix('/').unwrap_or(trimmed);
		let segments: Vec<&str> = path.split('/').collect();

		fn segment<T: FromStr>(input: &str, name: &str, value: &str) -> Result<T> {
			value
				.parse::<T>()
				.map_err(|_| TileError::InvalidFormat(format!("{name} ({value:?}) in path {input:?} is not a valid integer")).into())
		}

		let (z, f, x, y) = match segments.as_slice() {
			[z, f, x, y] => (
				segment::<u8>(input, "z", z)?,
				segment::<i64>(input, "f", f)?,
				segment::<u32>(input, "x", x)?,
				segment::<u32>(input, "y", y)?,
			),
			[z, x, y] => (
				segment::<u8>(input, "z", z)?,
				0,
				segment::<u32>(input, "x", x)?,
				segment::<u32>(input, "y", y)?,
			),
			_ => bail!(TileError::InvalidFormat(format!(
				"path {input:?} must have the form /z/f/x/y or /z/x/y"
			))),
		};

		TileAddress::new(z, f, x, y)
	}
}

impl Display for TileAddress {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "/{}/{}/{}/{}", self.z, self.f, self.x, self.y)
	}
}

impl Debug for TileAddress {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileAddress({}, {}, [{}, {}])", self.z, self.f, self.x, self.y)
	}
}

impl FromStr for TileAddress {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		TileAddress::parse_path(s)
	}
}

/// Ordered by zoom level, then floor, then row, then column.
impl Ord for TileAddress {
	fn cmp(&self, other: &Self) -> Ordering {
		self
			.z
			.cmp(&other.z)
			.then(self.f.cmp(&other.f))
			.then(self.y.cmp(&other.y))
			.then(self.x.cmp(&other.x))
	}
}

impl PartialOrd for TileAddress {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
