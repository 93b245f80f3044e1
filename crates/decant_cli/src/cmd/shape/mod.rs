use std::fmt;

use decant::tree::{DecodeOptions, Decoder, Value};

use crate::cmd::{CliError, Result};

/// Integer widths a shape can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IntKind {
	I8,
	I16,
	I32,
	I64,
	U8,
	U16,
	U32,
	U64,
}

/// Run-time description of a decode target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Shape {
	Bool,
	String,
	F32,
	F64,
	Int(IntKind),
	/// Any value, decoded as-is.
	Value,
	/// `[SHAPE]`
	Array(Box<Shape>),
	/// `{SHAPE}`: object with string keys.
	Map(Box<Shape>),
	/// `SHAPE?`
	Optional(Box<Shape>),
}

impl Shape {
	/// Parse shape syntax such as `[u8]`, `{string?}`, or `[[f64]]?`.
	///
	/// Nesting (brackets and `?` suffixes together) is capped at the default decode depth.
	pub(crate) fn parse(input: &str) -> Result<Self> {
		Self::parse_with_limit(input, DecodeOptions::default().max_depth)
	}

	pub(crate) fn parse_with_limit(input: &str, max_nesting: u32) -> Result<Self> {
		let mut parser = ShapeParser {
			input,
			bytes: input.as_bytes(),
			idx: 0,
			max_nesting,
		};
		let (shape, _) = parser.parse_shape(0)?;
		parser.skip_whitespace();
		if parser.idx != parser.bytes.len() {
			return Err(parser.invalid());
		}
		Ok(shape)
	}
}

struct ShapeParser<'a> {
	input: &'a str,
	bytes: &'a [u8],
	idx: usize,
	max_nesting: u32,
}

impl ShapeParser<'_> {
	/// Parse one shape enclosed by `nesting` wrappers; returns it with its height.
	fn parse_shape(&mut self, nesting: u32) -> Result<(Shape, u32)> {
		if nesting > self.max_nesting {
			return Err(self.invalid());
		}
		self.skip_whitespace();
		let (mut shape, mut height) = match self.bytes.get(self.idx) {
			Some(b'[') => {
				self.idx += 1;
				let (inner, height) = self.parse_shape(nesting + 1)?;
				self.expect(b']')?;
				(Shape::Array(Box::new(inner)), height + 1)
			}
			Some(b'{') => {
				self.idx += 1;
				let (inner, height) = self.parse_shape(nesting + 1)?;
				self.expect(b'}')?;
				(Shape::Map(Box::new(inner)), height + 1)
			}
			Some(_) => (self.parse_name()?, 1),
			None => return Err(self.invalid()),
		};

		self.skip_whitespace();
		while self.bytes.get(self.idx) == Some(&b'?') {
			height += 1;
			if nesting + height - 1 > self.max_nesting {
				return Err(self.invalid());
			}
			self.idx += 1;
			shape = Shape::Optional(Box::new(shape));
			self.skip_whitespace();
		}
		Ok((shape, height))
	}

	fn parse_name(&mut self) -> Result<Shape> {
		let start = self.idx;
		while self.idx < self.bytes.len() && self.bytes[self.idx].is_ascii_alphanumeric() {
			self.idx += 1;
		}

		let shape = match &self.input[start..self.idx] {
			"bool" => Shape::Bool,
			"string" => Shape::String,
			"f32" => Shape::F32,
			"f64" => Shape::F64,
			"i8" => Shape::Int(IntKind::I8),
			"i16" => Shape::Int(IntKind::I16),
			"i32" => Shape::Int(IntKind::I32),
			"i64" => Shape::Int(IntKind::I64),
			"u8" => Shape::Int(IntKind::U8),
			"u16" => Shape::Int(IntKind::U16),
			"u32" => Shape::Int(IntKind::U32),
			"u64" => Shape::Int(IntKind::U64),
			"value" => Shape::Value,
			_ => return Err(self.invalid()),
		};
		Ok(shape)
	}

	fn expect(&mut self, byte: u8) -> Result<()> {
		self.skip_whitespace();
		if self.bytes.get(self.idx) != Some(&byte) {
			return Err(self.invalid());
		}
		self.idx += 1;
		Ok(())
	}

	fn skip_whitespace(&mut self) {
		while self.idx < self.bytes.len() && self.bytes[self.idx].is_ascii_whitespace() {
			self.idx += 1;
		}
	}

	fn invalid(&self) -> CliError {
		CliError::InvalidShape {
			shape: self.input.to_owned(),
		}
	}
}

impl IntKind {
	fn as_str(self) -> &'static str {
		match self {
			Self::I8 => "i8",
			Self::I16 => "i16",
			Self::I32 => "i32",
			Self::I64 => "i64",
			Self::U8 => "u8",
			Self::U16 => "u16",
			Self::U32 => "u32",
			Self::U64 => "u64",
		}
	}
}

impl fmt::Display for Shape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool => f.write_str("bool"),
			Self::String => f.write_str("string"),
			Self::F32 => f.write_str("f32"),
			Self::F64 => f.write_str("f64"),
			Self::Int(kind) => f.write_str(kind.as_str()),
			Self::Value => f.write_str("value"),
			Self::Array(inner) => write!(f, "[{inner}]"),
			Self::Map(inner) => write!(f, "{{{inner}}}"),
			Self::Optional(inner) => write!(f, "{inner}?"),
		}
	}
}

/// Decode the value under `decoder` as `shape`, producing plain JSON.
pub(crate) fn decode_shape(shape: &Shape, decoder: &Decoder<'_>) -> decant::tree::Result<serde_json::Value> {
	let single = decoder.single_value_container();
	let decoded = match shape {
		Shape::Bool => serde_json::Value::Bool(single.read_bool()?),
		Shape::String => serde_json::Value::String(single.read_string()?),
		Shape::F32 => serde_json::Value::from(f64::from(single.read_float::<f32>()?)),
		Shape::F64 => serde_json::Value::from(single.read_float::<f64>()?),
		Shape::Int(kind) => match kind {
			IntKind::I8 => serde_json::Value::from(single.read_integer::<i8>()?),
			IntKind::I16 => serde_json::Value::from(single.read_integer::<i16>()?),
			IntKind::I32 => serde_json::Value::from(single.read_integer::<i32>()?),
			IntKind::I64 => serde_json::Value::from(single.read_integer::<i64>()?),
			IntKind::U8 => serde_json::Value::from(single.read_integer::<u8>()?),
			IntKind::U16 => serde_json::Value::from(single.read_integer::<u16>()?),
			IntKind::U32 => serde_json::Value::from(single.read_integer::<u32>()?),
			IntKind::U64 => serde_json::Value::from(single.read_integer::<u64>()?),
		},
		Shape::Value => serde_json::Value::from(decoder.decode::<Value>()?),
		Shape::Array(inner) => {
			let mut container = decoder.sequence_container()?;
			let mut items = Vec::with_capacity(container.count());
			while !container.is_at_end() {
				let element = container.delegate_decoder()?;
				items.push(decode_shape(inner, &element)?);
			}
			serde_json::Value::Array(items)
		}
		Shape::Map(inner) => {
			let container = decoder.keyed_container::<String>()?;
			let mut members = serde_json::Map::new();
			for key in container.all_keys() {
				let member = container.delegate_decoder_for_key(&key)?;
				let decoded = decode_shape(inner, &member)?;
				members.insert(key, decoded);
			}
			serde_json::Value::Object(members)
		}
		Shape::Optional(inner) => {
			if single.is_null() {
				serde_json::Value::Null
			} else {
				decode_shape(inner, decoder)?
			}
		}
	};
	Ok(decoded)
}
