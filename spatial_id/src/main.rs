// Subcommands, one module each
mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use spatial_id::config::Config;
use std::path::PathBuf;

// Define the command-line interface using the clap crate
#[derive(Parser, Debug)]
#[command(
	name = "spatial-id", // Binary name, the package is called spatial_id
	author, // Set the author
	version, // Set the version
	about, // Set a short description
	long_about = None, // Disable long description
	propagate_version = true, // Enable version flag for subcommands
	disable_help_subcommand = true, // Disable help subcommand
)]
struct Cli {
	#[command(subcommand)]
	command: Commands, // Set subcommands

	/// YAML configuration file
	#[arg(long, short, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	#[command(flatten)]
	verbose: Verbosity<WarnLevel>, // Set verbosity flag
}

// Define subcommands for the command-line interface
#[derive(Subcommand, Debug)]
enum Commands {
	/// Find the tile containing a point
	Locate(tools::locate::Subcommand),

	/// Show a tile given as path or tilehash
	Inspect(tools::inspect::Subcommand),

	/// Show the parent of a tile
	Parent(tools::parent::Subcommand),

	/// List the eight children of a tile
	Children(tools::children::Subcommand),

	/// List the 26 neighbours of a tile
	Surroundings(tools::surroundings::Subcommand),

	/// Print the footprint of a tile as GeoJSON
	Polygon(tools::polygon::Subcommand),

	/// Test a tile and its neighbours against a GeoJSON geometry
	Intersect(tools::intersect::Subcommand),
}

// Main function for running the command-line interface
fn main() -> Result<()> {
	let cli = Cli::parse();

	// Initialize logger and set log level based on verbosity flag
	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

// Load the configuration and dispatch to the subcommand
fn run(cli: Cli) -> Result<()> {
	let config = match &cli.config {
		Some(path) => {
			log::info!("loading config from {path:?}");
			Config::from_path(path)?
		}
		None => Config::default(),
	};
	log::debug!("{config:?}");

	match &cli.command {
		Commands::Locate(arguments) => tools::locate::run(arguments, &config),
		Commands::Inspect(arguments) => tools::inspect::run(arguments, &config),
		Commands::Parent(arguments) => tools::parent::run(arguments, &config),
		Commands::Children(arguments) => tools::children::run(arguments, &config),
		Commands::Surroundings(arguments) => tools::surroundings::run(arguments, &config),
		Commands::Polygon(arguments) => tools::polygon::run(arguments, &config),
		Commands::Intersect(arguments) => tools::intersect::run(arguments, &config),
	}
}
