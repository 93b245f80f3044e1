use std::path::PathBuf;

use decant::tree::{DecodeError, DecodeOptions, ValueDecoder};
use serde::Serialize;

use crate::cmd::shape::{Shape, decode_shape};
use crate::cmd::util::{load_document, parse_at, print_json};
use crate::cmd::{CliError, Result};

/// Inputs for the `decode` command.
pub struct DecodeArgs {
	pub path: PathBuf,
	pub shape: String,
	pub at: Option<String>,
	pub max_depth: Option<u32>,
	pub json: bool,
}

#[derive(Serialize)]
struct DecodeJson {
	ok: bool,
	path: String,
	at: String,
	shape: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	value: Option<serde_json::Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	error: Option<ErrorJson>,
}

#[derive(Serialize)]
struct ErrorJson {
	kind: &'static str,
	path: Option<String>,
	message: String,
}

impl From<&DecodeError> for ErrorJson {
	fn from(err: &DecodeError) -> Self {
		Self {
			kind: err.kind_label(),
			path: err.path().map(ToString::to_string),
			message: err.to_string(),
		}
	}
}

/// Decode a document subtree against a shape and print the result.
pub fn run(args: DecodeArgs) -> Result<()> {
	let DecodeArgs {
		path,
		shape,
		at,
		max_depth,
		json,
	} = args;

	let shape = Shape::parse(&shape)?;
	let at = parse_at(at.as_deref())?;
	let root = load_document(&path)?;

	let options = max_depth.map_or_else(DecodeOptions::default, |max_depth| DecodeOptions { max_depth });
	let decoder = ValueDecoder::new().with_options(options);
	let outcome = decoder.decode_at_with(&root, &at, |d| decode_shape(&shape, d));

	if json {
		let (value, error) = match &outcome {
			Ok(value) => (Some(value.clone()), None),
			Err(err) => (None, Some(ErrorJson::from(err))),
		};
		print_json(&DecodeJson {
			ok: outcome.is_ok(),
			path: path.display().to_string(),
			at: at.to_string(),
			shape: shape.to_string(),
			value,
			error,
		})?;
		return outcome.map(|_| ()).map_err(CliError::from);
	}

	let value = outcome?;
	let rendered = serde_json::to_string(&value).map_err(CliError::Render)?;
	println!("path: {}", path.display());
	println!("at: {at}");
	println!("shape: {shape}");
	println!("value: {rendered}");
	Ok(())
}
