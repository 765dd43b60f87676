use std::fmt;
use thiserror::Error;

/// The kinds of failure a tile operation can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	InvalidArgument,
	InvalidFormat,
	OutOfRange,
	Corrupt,
}

impl fmt::Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			ErrorKind::InvalidArgument => "invalid argument",
			ErrorKind::InvalidFormat => "invalid format",
			ErrorKind::OutOfRange => "out of range",
			ErrorKind::Corrupt => "corrupt",
		})
	}
}

/// Error raised by tile arithmetic, navigation and encoding.
///
/// Operations return `anyhow::Result`; the root cause of every error they produce
/// downcasts to `TileError`, see [`TileError::kind_of`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TileError {
	/// Non-finite or out-of-domain numeric input.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	/// Malformed path string, tilehash or GeoJSON.
	#[error("invalid format: {0}")]
	InvalidFormat(String),
	/// The requested tile does not exist, e.g. beyond the top or bottom edge of the grid.
	#[error("out of range: {0}")]
	OutOfRange(String),
	/// An internal invariant was violated.
	#[error("corrupt: {0}")]
	Corrupt(String),
}

impl TileError {
	#[must_use]
	pub fn kind(&self) -> ErrorKind {
		match self {
			TileError::InvalidArgument(_) => ErrorKind::InvalidArgument,
			TileError::InvalidFormat(_) => ErrorKind::InvalidFormat,
			TileError::OutOfRange(_) => ErrorKind::OutOfRange,
			TileError::Corrupt(_) => ErrorKind::Corrupt,
		}
	}

	/// Finds the `TileError` in the chain of `error` and returns its kind.
	///
	/// Context added on top of the error (e.g. with `anyhow::Context`) is skipped.
	#[must_use]
	pub fn kind_of(error: &anyhow::Error) -> Option<ErrorKind> {
		error
			.chain()
			.find_map(|cause| cause.downcast_ref::<TileError>())
			.map(TileError::kind)
	}
}
