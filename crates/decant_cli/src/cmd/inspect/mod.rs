use std::path::PathBuf;

use decant::tree::{Value, ValueDecoder};
use serde::Serialize;

use crate::cmd::Result;
use crate::cmd::print::{PrintOptions, render_value};
use crate::cmd::util::{load_document, parse_at, print_json};

#[derive(Serialize)]
struct InspectJson {
	path: String,
	at: String,
	kind: &'static str,
	len: Option<usize>,
	keys: Vec<String>,
	value: Value,
}

/// Print the kind and contents of a document subtree.
pub fn run(path: PathBuf, at: Option<String>, json: bool) -> Result<()> {
	let at = parse_at(at.as_deref())?;
	let root = load_document(&path)?;
	let selected: Value = ValueDecoder::new().decode_at(&root, &at)?;

	let len = match &selected {
		Value::Object(members) => Some(members.len()),
		Value::Array(items) => Some(items.len()),
		Value::String(text) => Some(text.chars().count()),
		_ => None,
	};
	let mut keys: Vec<String> = selected.as_object().map(|members| members.keys().cloned().collect()).unwrap_or_default();
	keys.sort_unstable();

	if json {
		return print_json(&InspectJson {
			path: path.display().to_string(),
			at: at.to_string(),
			kind: selected.kind().as_str(),
			len,
			keys,
			value: selected,
		});
	}

	println!("path: {}", path.display());
	println!("at: {at}");
	println!("kind: {}", selected.kind());
	if let Some(len) = len {
		println!("len: {len}");
	}
	print!("{}", render_value(&selected, PrintOptions::default()));
	Ok(())
}
