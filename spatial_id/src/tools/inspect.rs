use super::{parse_tile, print_json};
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
	print_json(&tile.to_payload(), config)
}
