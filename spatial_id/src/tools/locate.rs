use super::print_json;
use anyhow::{Result, ensure};
use clap::Args;
use spatial_id::{
	Tile,
	config::Config,
	core::{GeoPoint, MAX_LAT, MAX_LNG, TileError},
};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// latitude in degrees, within ±85.0511287798
	#[arg(long, required = true, allow_negative_numbers = true)]
	lat: f64,

	/// longitude in degrees, within ±180
	#[arg(long, alias = "lon", required = true, allow_negative_numbers = true)]
	lng: f64,

	/// altitude in meters above the reference plane
	#[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
	alt: f64,

	/// zoom level [default: `default_zoom` of the config]
	#[arg(long, short)]
	zoom: Option<u8>,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	print_json(&locate(arguments, config)?.to_payload(), config)
}

fn locate(arguments: &Subcommand, config: &Config) -> Result<Tile> {
	let zoom = arguments.zoom.unwrap_or(config.default_zoom);
	log::debug!(
		"locate lat={} lng={} alt={} zoom={zoom}",
		arguments.lat,
		arguments.lng,
		arguments.alt
	);

	ensure!(
		(-MAX_LAT..=MAX_LAT).contains(&arguments.lat),
		TileError::InvalidArgument(format!("lat ({}) must be within ±{MAX_LAT}", arguments.lat))
	);
	ensure!(
		(-MAX_LNG..=MAX_LNG).contains(&arguments.lng),
		TileError::InvalidArgument(format!("lng ({}) must be within ±{MAX_LNG}", arguments.lng))
	);
	ensure!(
		zoom <= config.max_zoom,
		TileError::InvalidArgument(format!("zoom ({zoom}) must be within 0..={}", config.max_zoom))
	);

	Tile::from_geo_point(&GeoPoint::new(arguments.lng, arguments.lat, arguments.alt), zoom)
}
