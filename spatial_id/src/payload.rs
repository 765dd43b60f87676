use crate::Tile;
use serde::{Deserialize, Serialize};
use spatial_id_core::{GeoPoint, TileAddress};

/// The result record handed to callers: everything a presentation layer needs about one tile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TilePayload {
	pub path_string: String,
	pub tile_hash: String,
	pub tile_address: TileAddress,
	pub zoom: u8,
	pub center: GeoPoint,
	pub alt: f64,
}

impl From<&Tile> for TilePayload {
	fn from(tile: &Tile) -> Self {
		TilePayload {
			path_string: tile.path().to_string(),
			tile_hash: tile.tilehash().to_string(),
			tile_address: *tile.address(),
			zoom: tile.zoom(),
			center: tile.center(),
			alt: tile.alt(),
		}
	}
}
