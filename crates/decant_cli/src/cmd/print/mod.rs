use std::fmt::Write as _;

use decant::tree::Value;

/// Output truncation and formatting limits for value trees.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PrintOptions {
	/// Maximum number of members printed for a single object.
	pub max_members: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested arrays/objects.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_members: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 6,
		}
	}
}

/// Render `value` as an indented tree, one scalar per line.
pub(crate) fn render_value(value: &Value, options: PrintOptions) -> String {
	let mut out = String::new();
	write_value(&mut out, value, 0, 0, options);
	out
}

fn write_value(out: &mut String, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Null => {
			let _ = writeln!(out, "{pad}null");
		}
		Value::Bool(v) => {
			let _ = writeln!(out, "{pad}{v}");
		}
		Value::Number(v) => {
			let _ = writeln!(out, "{pad}{v}");
		}
		Value::String(v) => {
			let _ = writeln!(out, "{pad}\"{}\"", truncate(v, options.max_string_len));
		}
		Value::Array(items) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{pad}[... {} items]", items.len());
				return;
			}
			let _ = writeln!(out, "{pad}[");
			for item in items.iter().take(options.max_array_items) {
				write_value(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_array_items {
				let _ = writeln!(out, "{pad}  ... {} more", items.len() - options.max_array_items);
			}
			let _ = writeln!(out, "{pad}]");
		}
		Value::Object(members) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{pad}{{ ... {} members }}", members.len());
				return;
			}
			let mut keys: Vec<&String> = members.keys().collect();
			keys.sort_unstable();

			let _ = writeln!(out, "{pad}{{");
			for key in keys.iter().take(options.max_members) {
				let member = &members[key.as_str()];
				let _ = write!(out, "{pad}  {key} = ");
				if matches!(member, Value::Object(_) | Value::Array(_)) {
					let _ = writeln!(out);
					write_value(out, member, indent + 4, depth + 1, options);
				} else {
					write_value(out, member, 0, depth + 1, options);
				}
			}
			if keys.len() > options.max_members {
				let _ = writeln!(out, "{pad}  ... {} more members", keys.len() - options.max_members);
			}
			let _ = writeln!(out, "{pad}}}");
		}
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
