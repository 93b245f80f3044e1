use std::fs;
use std::path::Path;

use decant::tree::{CodingPath, Value};
use serde::Serialize;

use crate::cmd::{CliError, Result};

/// Read and parse a JSON document into a value tree.
pub(crate) fn load_document(path: &Path) -> Result<Value> {
	let text = fs::read_to_string(path).map_err(|source| CliError::Io {
		path: path.to_owned(),
		source,
	})?;
	tracing::debug!(path = %path.display(), bytes = text.len(), "loaded document");
	serde_json::from_str(&text).map_err(|source| CliError::Parse {
		path: path.to_owned(),
		source,
	})
}

/// Parse an optional `--at` selector, defaulting to the root.
pub(crate) fn parse_at(at: Option<&str>) -> Result<CodingPath> {
	Ok(at.map(CodingPath::parse).transpose()?.unwrap_or_default())
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json(value: &impl Serialize) -> Result<()> {
	let text = serde_json::to_string_pretty(value).map_err(CliError::Render)?;
	println!("{text}");
	Ok(())
}
