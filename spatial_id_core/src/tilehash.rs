//! Tilehash: a tile address written as its root-to-leaf path in the 8-ary tile tree.
//!
//! Each digit `1..=8` picks one child (in the order documented in the navigation
//! module) while descending one zoom level, so the hash of a tile at zoom `z` has
//! exactly `z` digits. The digits describe the absolute floor; a leading `-` marks a
//! negative floor.
//!
//! ```
//! use spatial_id_core::{TileAddress, decode_tilehash, encode_tilehash};
//!
//! let address = TileAddress::new(3, -3, 5, 2).unwrap();
//! assert_eq!(encode_tilehash(&address).unwrap(), "-276");
//! assert_eq!(decode_tilehash("-276").unwrap(), address);
//! ```

use crate::{MAX_ZOOM, TileAddress, TileError};
use anyhow::{Result, bail, ensure};

const SIGN: char = '-';

/// Encodes `address` as a tilehash.
///
/// # Errors
///
/// - [`TileError::InvalidArgument`] if the address is not well-formed.
/// - [`TileError::OutOfRange`] if the floor cannot be expressed at the address' zoom
///   level, i.e. `|f| >= 2^z`.
/// - [`TileError::Corrupt`] if a tile cannot be found among its parent's children.
pub fn encode_tilehash(address: &TileAddress) -> Result<String> {
	ensure!(
		address.is_valid(),
		TileError::InvalidArgument(format!("{address:?} is not a valid tile address"))
	);
	ensure!(
		address.is_tilehash_representable(),
		TileError::OutOfRange(format!(
			"floor {} cannot be expressed as a tilehash at zoom {}",
			address.f, address.z
		))
	);

	let mut current = TileAddress {
		f: address.f.abs(),
		..*address
	};
	let mut digits = Vec::with_capacity(usize::from(address.z) + 1);
	while current.z > 0 {
		let parent = current.parent()?;
		let Some(index) = parent.children()?.iter().position(|child| *child == current) else {
			bail!(TileError::Corrupt(format!(
				"{current:?} is not among the children of {parent:?}"
			)));
		};
		digits.push(char::from(b'1' + index as u8));
		current = parent;
	}
	if address.f < 0 {
		digits.push(SIGN);
	}
	Ok(digits.iter().rev().collect())
}

/// Decodes a tilehash back into a tile address.
///
/// The empty string is the root tile. A lone `-`, any character other than the digits
/// `1..=8`, more than [`MAX_ZOOM`] digits, or a sign on a tile whose floor is 0 are
/// rejected.
///
/// # Errors
///
/// Returns [`TileError::InvalidFormat`] for malformed input.
pub fn decode_tilehash(hash: &str) -> Result<TileAddress> {
	let (negative, digits) = match hash.strip_prefix(SIGN) {
		Some(rest) => (true, rest),
		None => (false, hash),
	};
	let invalid = |reason: &str| TileError::InvalidFormat(format!("tilehash {hash:?} {reason}"));

	ensure!(!(negative && digits.is_empty()), invalid("has a sign but no digits"));
	ensure!(
		digits.len() <= usize::from(MAX_ZOOM),
		invalid(&format!("is deeper than zoom {MAX_ZOOM}"))
	);

	let mut current = TileAddress::ROOT;
	for c in digits.chars() {
		let index = match c {
			'1'..='8' => c as usize - '1' as usize,
			_ => bail!(invalid(&format!("contains invalid character {c:?}"))),
		};
		current = current.children()?[index];
	}

	if negative {
		ensure!(current.f != 0, invalid("has a sign on floor 0"));
		current.f = -current.f;
	}
	Ok(current)
}

impl TileAddress {
	/// Encodes this address, see [`encode_tilehash`].
	pub fn to_tilehash(&self) -> Result<String> {
		encode_tilehash(self)
	}

	/// Decodes a tilehash, see [`decode_tilehash`].
	pub fn from_tilehash(hash: &str) -> Result<TileAddress> {
		decode_tilehash(hash)
	}

	/// `true` if the floor fits into a tilehash of this zoom level (`|f| < 2^z`).
	#[must_use]
	pub fn is_tilehash_representable(&self) -> bool {
		self.z <= MAX_ZOOM && self.f.unsigned_abs() < TileAddress::size(self.z)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{ErrorKind, GeoPoint};
	use rstest::rstest;

	fn tile(z: u8, f: i64, x: u32, y: u32) -> TileAddress {
		TileAddress::new(z, f, x, y).unwrap()
	}

	#[rstest]
	#[case(tile(0, 0, 0, 0), "")]
	#[case(tile(1, 0, 1, 1), "4")]
	#[case(tile(1, -1, 0, 0), "-5")]
	#[case(tile(2, 3, 0, 3), "77")]
	#[case(tile(3, -3, 5, 2), "-276")]
	#[case(tile(18, 0, 232847, 103226), "244113223421334242")]
	#[case(tile(25, 3, 29825583, 13212735), "2441132243114432111434488")]
	fn golden_values(#[case] address: TileAddress, #[case] hash: &str) {
		assert_eq!(encode_tilehash(&address).unwrap(), hash);
		assert_eq!(decode_tilehash(hash).unwrap(), address);
	}

	#[rstest]
	#[case(tile(4, 15, 0, 15))]
	#[case(tile(4, -15, 15, 0))]
	#[case(tile(10, -1, 1023, 512))]
	#[case(tile(31, -1_000_000_007, (1 << 31) - 1, 12345))]
	#[case(tile(31, (1 << 31) - 1, 0, (1 << 31) - 1))]
	fn round_trip(#[case] address: TileAddress) {
		let hash = address.to_tilehash().unwrap();
		assert_eq!(hash.trim_start_matches('-').len(), usize::from(address.z));
		assert_eq!(hash.starts_with('-'), address.f < 0);
		assert_eq!(TileAddress::from_tilehash(&hash).unwrap(), address);
	}

	#[test]
	fn round_trip_every_tile_at_zoom_2() {
		for f in -3..4 {
			for x in 0..4 {
				for y in 0..4 {
					let address = tile(2, f, x, y);
					assert_eq!(decode_tilehash(&encode_tilehash(&address).unwrap()).unwrap(), address);
				}
			}
		}
	}

	#[test]
	fn digits_follow_the_path_from_the_root() {
		let address = tile(18, 0, 232847, 103226);
		let hash = address.to_tilehash().unwrap();
		for zoom in 1..=18u8 {
			let ancestor = address.at_zoom(zoom).unwrap();
			assert_eq!(ancestor.to_tilehash().unwrap(), hash[..usize::from(zoom)]);
		}
	}

	#[test]
	fn tokyo_station_end_to_end() {
		let point = GeoPoint::new(139.767125, 35.681236, 10.0);
		let address = TileAddress::from_geo_point(&point, 18).unwrap();
		assert_eq!(address.to_path(), "/18/0/232847/103226");
		assert_eq!(address.to_tilehash().unwrap(), "244113223421334242");
	}

	#[rstest]
	#[case(tile(0, 1, 0, 0))]
	#[case(tile(0, -1, 0, 0))]
	#[case(tile(3, 8, 0, 0))]
	#[case(tile(3, -8, 0, 0))]
	fn floor_not_representable(#[case] address: TileAddress) {
		assert!(!address.is_tilehash_representable());
		let err = encode_tilehash(&address).unwrap_err();
		assert_eq!(TileError::kind_of(&err), Some(ErrorKind::OutOfRange));
	}

	#[test]
	fn invalid_address() {
		let address = TileAddress { z: 2, f: 0, x: 4, y: 0 };
		let err = encode_tilehash(&address).unwrap_err();
		assert_eq!(TileError::kind_of(&err), Some(ErrorKind::InvalidArgument));
	}

	#[rstest]
	#[case("-")]
	#[case("0")]
	#[case("9")]
	#[case("12a")]
	#[case("--1")]
	#[case(" 1")]
	#[case("1234-")]
	#[case("-1")]
	#[case("-1234")]
	#[case("11111111111111111111111111111111")]
	fn decode_invalid(#[case] hash: &str) {
		let err = decode_tilehash(hash).unwrap_err();
		assert_eq!(TileError::kind_of(&err), Some(ErrorKind::InvalidFormat), "{hash:?}");
	}
}
