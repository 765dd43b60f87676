use super::{parse_tile, payloads, print_json};
use anyhow::Result;
use clap::Args;
use spatial_id::config::Config;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// tile as path (/z/f/x/y) or tilehash
	#[arg(required = true, allow_hyphen_values = true)]
	id: String,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let tile = parse_tile(&arguments.id)?;
	let around = tile.surroundings();
	if around.len() < 26 {
		log::info!("{} of 26 neighbours of {tile} exist", around.len());
	}
	print_json(&payloads(&around), config)
}
