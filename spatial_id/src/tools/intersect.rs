use super::{parse_tile, payloads, print_json};
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use spatial_id::{TilePayload, config::Config, geometry::parse_geojson};
use std::{fs, path::PathBuf};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// tile as path (/z/f/x/y) or tilehash
	#[arg(required = true, allow_hyphen_values = true)]
	id: String,

	/// GeoJSON file with a Feature, FeatureCollection or geometry
	#[arg(required = true)]
	geojson: PathBuf,
}

#[derive(Debug, Serialize)]
struct Intersection {
	intersects: bool,
	neighbors: Vec<TilePayload>,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	print_json(&intersect(arguments, config)?, config)
}

fn intersect(arguments: &Subcommand, config: &Config) -> Result<Intersection> {
	let tile = parse_tile(&arguments.id)?;
	let path = &arguments.geojson;
	let json = fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?;
	let geometry = parse_geojson(&json).with_context(|| format!("parsing GeoJSON in {path:?}"))?;

	let neighbors = tile.intersecting_neighbors_with_max_zoom(&geometry, config.bbox_max_zoom)?;
	log::info!("{} tiles around {path:?} intersect", neighbors.len());

	Ok(Intersection {
		intersects: tile.intersects(&geometry),
		neighbors: payloads(&neighbors),
	})
}
