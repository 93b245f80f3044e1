use std::fmt;

use crate::tree::{DecodeError, Result};

const ROOT_LABEL: &str = "<root>";

/// One step from a parent value to a child value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
	/// Object member key.
	Key(String),
	/// Zero-based array index.
	Index(usize),
}

/// Location of a value inside the tree, from the root down.
///
/// Paths are extended by copying, so sibling containers never observe each
/// other's segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodingPath {
	segments: Vec<PathSegment>,
}

impl CodingPath {
	/// Empty path addressing the root value.
	pub fn root() -> Self {
		Self::default()
	}

	/// Build a path from explicit segments.
	pub fn from_segments(segments: Vec<PathSegment>) -> Self {
		Self { segments }
	}

	/// Ordered segments, root first.
	pub fn segments(&self) -> &[PathSegment] {
		&self.segments
	}

	/// Number of segments.
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Whether this is the root path.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// Last segment, if any.
	pub fn last(&self) -> Option<&PathSegment> {
		self.segments.last()
	}

	/// Copy of this path with `segment` appended.
	pub fn join(&self, segment: PathSegment) -> Self {
		let mut segments = Vec::with_capacity(self.segments.len() + 1);
		segments.extend_from_slice(&self.segments);
		segments.push(segment);
		Self { segments }
	}

	/// Copy of this path with an object key appended.
	pub fn join_key(&self, key: impl Into<String>) -> Self {
		self.join(PathSegment::Key(key.into()))
	}

	/// Copy of this path with an array index appended.
	pub fn join_index(&self, index: usize) -> Self {
		self.join(PathSegment::Index(index))
	}

	/// Parse dotted key syntax with optional `[index]` selectors, e.g. `items[2].name`.
	///
	/// Keys that are not plain identifiers use a quoted selector, e.g. `["a.b"][1]`,
	/// with `\"` and `\\` escapes. This is the form [`Display`](fmt::Display) emits.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || DecodeError::InvalidPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut segments = Vec::new();

		while idx < bytes.len() {
			let start = idx;
			while idx < bytes.len() && !is_path_delimiter(bytes[idx]) {
				idx += 1;
			}

			if idx > start {
				segments.push(PathSegment::Key(input[start..idx].to_owned()));
			} else if !(start == 0 && bytes[idx] == b'[') {
				// Only a leading selector may stand without a key in front of it.
				return Err(invalid());
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				if bytes.get(idx) == Some(&b'"') {
					let (key, next) = parse_quoted_key(input, idx + 1).ok_or_else(invalid)?;
					segments.push(PathSegment::Key(key));
					idx = next;
				} else {
					let n_start = idx;
					while idx < bytes.len() && bytes[idx].is_ascii_digit() {
						idx += 1;
					}
					if idx == n_start {
						return Err(invalid());
					}
					let number = input[n_start..idx].parse::<usize>().map_err(|_| invalid())?;
					segments.push(PathSegment::Index(number));
				}

				if bytes.get(idx) != Some(&b']') {
					return Err(invalid());
				}
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(invalid());
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(invalid());
				}
			}
		}

		Ok(Self { segments })
	}
}

fn is_path_delimiter(byte: u8) -> bool {
	matches!(byte, b'.' | b'[' | b']')
}

/// Keys that render bare; everything else renders as `["..."]`.
fn is_plain_key(key: &str) -> bool {
	!key.is_empty() && key != ROOT_LABEL && !key.bytes().any(is_path_delimiter)
}

/// Read a quoted key body starting after the opening quote; returns the key and the index past the closing quote.
fn parse_quoted_key(input: &str, mut idx: usize) -> Option<(String, usize)> {
	let bytes = input.as_bytes();
	let mut key = String::new();
	let mut run_start = idx;

	loop {
		match *bytes.get(idx)? {
			b'"' => {
				key.push_str(&input[run_start..idx]);
				return Some((key, idx + 1));
			}
			b'\\' => {
				key.push_str(&input[run_start..idx]);
				match *bytes.get(idx + 1)? {
					escaped @ (b'"' | b'\\') => key.push(char::from(escaped)),
					_ => return None,
				}
				idx += 2;
				run_start = idx;
			}
			_ => idx += 1,
		}
	}
}

impl fmt::Display for PathSegment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Key(key) if is_plain_key(key) => f.write_str(key),
			Self::Key(key) => {
				f.write_str("[\"")?;
				for ch in key.chars() {
					if matches!(ch, '"' | '\\') {
						f.write_str("\\")?;
					}
					write!(f, "{ch}")?;
				}
				f.write_str("\"]")
			}
			Self::Index(index) => write!(f, "[{index}]"),
		}
	}
}

impl fmt::Display for CodingPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.segments.is_empty() {
			return f.write_str(ROOT_LABEL);
		}

		for (position, segment) in self.segments.iter().enumerate() {
			if position > 0 && matches!(segment, PathSegment::Key(key) if is_plain_key(key)) {
				f.write_str(".")?;
			}
			write!(f, "{segment}")?;
		}
		Ok(())
	}
}

impl FromIterator<PathSegment> for CodingPath {
	fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
		Self {
			segments: iter.into_iter().collect(),
		}
	}
}
