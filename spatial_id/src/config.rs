//! Settings of the `spatial-id` tool, read from YAML.
//!
//! ```yaml
//! default_zoom: 25
//! max_zoom: 30
//! bbox_max_zoom: 28
//! pretty: true
//! ```

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use spatial_id_core::{MAX_ZOOM, TileError, slippy::DEFAULT_BBOX_MAX_ZOOM};
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
	/// Zoom level used when none is given
	pub default_zoom: u8,

	/// Deepest zoom level accepted from the command line
	pub max_zoom: u8,

	/// Deepest zoom level for the representative tile of a geometry
	pub bbox_max_zoom: u8,

	/// Pretty-print JSON output
	pub pretty: bool,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			default_zoom: 25,
			max_zoom: 30,
			bbox_max_zoom: DEFAULT_BBOX_MAX_ZOOM,
			pretty: true,
		}
	}
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		let config: Config = serde_yaml_ng::from_reader(reader)?;
		config.validate()?;
		Ok(config)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		let config: Config = serde_yaml_ng::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config file {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("reading config file {path:?}"))
	}

	/// Checks that the zoom levels fit together.
	///
	/// # Errors
	///
	/// [`TileError::InvalidArgument`] if a zoom level is out of range.
	pub fn validate(&self) -> Result<()> {
		ensure!(
			self.max_zoom <= MAX_ZOOM,
			TileError::InvalidArgument(format!("max_zoom ({}) must not exceed {MAX_ZOOM}", self.max_zoom))
		);
		ensure!(
			self.default_zoom <= self.max_zoom,
			TileError::InvalidArgument(format!(
				"default_zoom ({}) must not exceed max_zoom ({})",
				self.default_zoom, self.max_zoom
			))
		);
		ensure!(
			self.bbox_max_zoom <= DEFAULT_BBOX_MAX_ZOOM,
			TileError::InvalidArgument(format!(
				"bbox_max_zoom ({}) must not exceed {DEFAULT_BBOX_MAX_ZOOM}",
				self.bbox_max_zoom
			))
		);
		Ok(())
	}
}
