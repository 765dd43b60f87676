use super::{parse_tile, print_json};
use anyhow::Result;
use clap::Args;
use spatial_id::{Tile, config::Config};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// tile as path (/z/f/x/y) or tilehash
	#[arg(required = true, allow_hyphen_values = true)]
	id: String,

	/// zoom level of the ancestor [default: one level up]
	#[arg(long, short)]
	zoom: Option<u8>,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	print_json(&parent(arguments)?.to_payload(), config)
}

fn parent(arguments: &Subcommand) -> Result<Tile> {
	let tile = parse_tile(&arguments.id)?;
	match arguments.zoom {
		Some(zoom) => tile.parent_at(zoom),
		None => tile.parent(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use spatial_id::core::{ErrorKind, TileError};

	fn args(id: &str, zoom: Option<u8>) -> Subcommand {
		Subcommand {
			id: id.to_string(),
			zoom,
		}
	}

	#[test]
	fn one_level_up() {
		assert_eq!(parent(&args("/18/0/232847/103226", None)).unwrap().path(), "/17/0/116423/51613");
	}

	#[test]
	fn absolute_zoom() {
		assert_eq!(parent(&args("244113223421334242", Some(3))).unwrap().tilehash(), "244");
	}

	#[test]
	fn root_has_no_parent() {
		let err = parent(&args("/0/0/0/0", None)).unwrap_err();
		assert_eq!(TileError::kind_of(&err), Some(ErrorKind::OutOfRange));
	}
}
