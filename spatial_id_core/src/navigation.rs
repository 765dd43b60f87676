//! Ancestors, descendants and neighbours in the 8-ary tile tree.
//!
//! Every tile at zoom `z` has exactly eight children at `z + 1`: each axis (`f`, `x`,
//! `y`) is split into the halves `2v` and `2v + 1`. The children are enumerated in a
//! fixed order which is part of the tilehash wire format:
//!
//! | index | digit | f        | x        | y        |
//! |-------|-------|----------|----------|----------|
//! | 0     | 1     | `2f`     | `2x`     | `2y`     |
//! | 1     | 2     | `2f`     | `2x + 1` | `2y`     |
//! | 2     | 3     | `2f`     | `2x`     | `2y + 1` |
//! | 3     | 4     | `2f`     | `2x + 1` | `2y + 1` |
//! | 4     | 5     | `2f + 1` | `2x`     | `2y`     |
//! | 5     | 6     | `2f + 1` | `2x + 1` | `2y`     |
//! | 6     | 7     | `2f + 1` | `2x`     | `2y + 1` |
//! | 7     | 8     | `2f + 1` | `2x + 1` | `2y + 1` |

use crate::{MAX_ZOOM, TileAddress, TileError, normalize};
use anyhow::{Result, ensure};

/// Offsets of the eight horizontal neighbours, clockwise starting in the north.
const PLANE_OFFSETS: [(i64, i64); 8] = [(0, -1), (1, -1), (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1)];

impl TileAddress {
	/// The ancestor `steps` levels up.
	///
	/// Each coordinate is floor-divided by `2^steps`, which keeps negative floors on the
	/// correct side of the reference plane.
	///
	/// # Errors
	///
	/// Returns [`TileError::OutOfRange`] if `steps > z`.
	pub fn parent_of(&self, steps: u8) -> Result<TileAddress> {
		ensure!(
			steps <= self.z,
			TileError::OutOfRange(format!("cannot go up {steps} levels from zoom {}", self.z))
		);
		Ok(TileAddress {
			z: self.z - steps,
			f: self.f >> steps,
			x: self.x >> steps,
			y: self.y >> steps,
		})
	}

	/// The direct parent, one level up.
	pub fn parent(&self) -> Result<TileAddress> {
		self.parent_of(1)
	}

	/// The ancestor at the absolute zoom level `zoom`.
	///
	/// # Errors
	///
	/// Returns [`TileError::OutOfRange`] if `zoom` is deeper than this tile.
	pub fn at_zoom(&self, zoom: u8) -> Result<TileAddress> {
		ensure!(
			zoom <= self.z,
			TileError::OutOfRange(format!("zoom {zoom} is not an ancestor level of zoom {}", self.z))
		);
		self.parent_of(self.z - zoom)
	}

	/// The eight children at `z + 1`, in canonical order (see module docs).
	///
	/// # Errors
	///
	/// Returns [`TileError::OutOfRange`] if the tile is already at [`MAX_ZOOM`] or its
	/// floor cannot be doubled.
	pub fn children(&self) -> Result<[TileAddress; 8]> {
		ensure!(
			self.z < MAX_ZOOM,
			TileError::OutOfRange(format!("tiles at zoom {MAX_ZOOM} have no children"))
		);
		let f = self
			.f
			.checked_mul(2)
			.ok_or_else(|| TileError::OutOfRange(format!("floor {} cannot be subdivided", self.f)))?;
		Ok(std::array::from_fn(|index| child(self.z + 1, f, self.x * 2, self.y * 2, index)))
	}

	/// Position `0..8` of this tile among its parent's children, or `None` at zoom 0.
	#[must_use]
	pub fn child_index(&self) -> Option<usize> {
		(self.z > 0).then(|| (((self.f & 1) << 2) | (i64::from(self.y & 1) << 1) | i64::from(self.x & 1)) as usize)
	}

	/// Moves by the given deltas and applies the wraparound rule ([`normalize`]).
	///
	/// `dx` may be any value; only its remainder modulo `2^z` matters.
	///
	/// # Errors
	///
	/// Returns [`TileError::OutOfRange`] if the target row is outside the grid or the
	/// floor overflows, and [`TileError::InvalidArgument`] if `z > MAX_ZOOM`.
	pub fn move_by(&self, df: i64, dx: i64, dy: i64) -> Result<TileAddress> {
		ensure!(
			self.z <= MAX_ZOOM,
			TileError::InvalidArgument(format!("z ({}) must be <= {MAX_ZOOM}", self.z))
		);
		let f = self
			.f
			.checked_add(df)
			.ok_or_else(|| TileError::OutOfRange(format!("floor {} + {df} overflows", self.f)))?;
		normalize(
			self.z,
			f,
			i64::from(self.x) + dx.rem_euclid(TileAddress::size(self.z) as i64),
			// a saturated row is outside the grid either way
			i64::from(self.y).saturating_add(dy),
		)
	}

	/// The up to eight horizontal neighbours on the same floor.
	///
	/// Columns wrap around the antimeridian; neighbours beyond the top or bottom row do
	/// not exist and are left out. At zoom levels 0 and 1 wrapped columns can coincide
	/// with this tile or with each other; such duplicates are dropped as well.
	#[must_use]
	pub fn neighbors_same_plane(&self) -> Vec<TileAddress> {
		let mut neighbors = Vec::with_capacity(8);
		for (dx, dy) in PLANE_OFFSETS {
			if let Ok(neighbor) = self.move_by(0, dx, dy) {
				if neighbor != *self && !neighbors.contains(&neighbor) {
					neighbors.push(neighbor);
				}
			}
		}
		neighbors
	}

	/// The Moore neighbourhood in three dimensions: up to 26 tiles.
	///
	/// Consists of the same-floor neighbours, then the tile directly above with its
	/// same-floor neighbours, then the tile directly below with its neighbours.
	#[must_use]
	pub fn neighbors_26(&self) -> Vec<TileAddress> {
		let mut neighbors = self.neighbors_same_plane();
		for df in [1, -1] {
			if let Ok(vertical) = self.move_by(df, 0, 0) {
				neighbors.push(vertical);
				neighbors.extend(vertical.neighbors_same_plane());
			}
		}
		neighbors
	}
}

/// Child `index` of a tile whose doubled coordinates are `(f, x, y)`.
///
/// Bit 0 of `index` selects the column half, bit 1 the row half, bit 2 the floor half.
fn child(z: u8, f: i64, x: u32, y: u32, index: usize) -> TileAddress {
	let bit = |shift: usize| ((index >> shift) & 1) as u32;
	TileAddress {
		z,
		f: f + i64::from(bit(2)),
		x: x + bit(0),
		y: y + bit(1),
	}
}

/// The eight children of [`TileAddress::ROOT`].
#[must_use]
pub fn root_children() -> [TileAddress; 8] {
	std::array::from_fn(|index| child(1, 0, 0, 0, index))
}
