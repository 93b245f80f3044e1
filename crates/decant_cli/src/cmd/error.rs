use std::path::PathBuf;

use decant::tree::DecodeError;
use thiserror::Error;

/// Command result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Input file could not be read.
	#[error("io: {}: {source}", path.display())]
	Io {
		/// File that failed to read.
		path: PathBuf,
		/// Underlying IO failure.
		source: std::io::Error,
	},
	/// Input file is not valid JSON.
	#[error("parse: {}: {source}", path.display())]
	Parse {
		/// File that failed to parse.
		path: PathBuf,
		/// Parser diagnostic.
		source: serde_json::Error,
	},
	/// Shape expression syntax is invalid.
	#[error("invalid shape: {shape:?}")]
	InvalidShape {
		/// Original user-provided shape string.
		shape: String,
	},
	/// Output could not be rendered as JSON.
	#[error("render: {0}")]
	Render(#[source] serde_json::Error),
	/// Decoding failed.
	#[error(transparent)]
	Decode(#[from] DecodeError),
}
