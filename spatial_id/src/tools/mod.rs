pub mod children;
pub mod inspect;
pub mod intersect;
pub mod locate;
pub mod parent;
pub mod polygon;
pub mod surroundings;

use anyhow::{Context, Result};
use serde::Serialize;
use spatial_id::{Tile, TilePayload, config::Config};

/// Parses a tile given on the command line as path or tilehash.
pub fn parse_tile(id: &str) -> Result<Tile> {
	log::debug!("parsing tile {id:?}");
	Tile::parse(id).with_context(|| format!("parsing tile {id:?}"))
}

pub fn payloads(tiles: &[Tile]) -> Vec<TilePayload> {
	tiles.iter().map(Tile::to_payload).collect()
}

pub fn to_json<T: Serialize>(value: &T, config: &Config) -> Result<String> {
	Ok(if config.pretty {
		serde_json::to_string_pretty(value)?
	} else {
		serde_json::to_string(value)?
	})
}

pub fn print_json<T: Serialize>(value: &T, config: &Config) -> Result<()> {
	println!("{}", to_json(value, config)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use spatial_id::core::{ErrorKind, TileError};

	#[test]
	fn parse_tile_keeps_the_error_kind() {
		let err = parse_tile("12x").unwrap_err();
		assert!(err.to_string().starts_with("parsing tile \"12x\""));
		assert_eq!(TileError::kind_of(&err), Some(ErrorKind::InvalidFormat));
	}

	#[test]
	fn json_output_follows_config() {
		let value = serde_json::json!({"a": [1, 2]});
		let compact = Config {
			pretty: false,
			..Config::default()
		};
		assert_eq!(to_json(&value, &compact).unwrap(), r#"{"a":[1,2]}"#);
		assert_eq!(to_json(&value, &Config::default()).unwrap(), "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
	}
}
