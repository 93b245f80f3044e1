use std::collections::HashMap;
use std::fmt;

use crate::tree::{CodingPath, PathSegment};

/// Dynamic JSON-shaped value tree.
///
/// Numbers are stored as a single `f64` regardless of whether the source text
/// was integral. Object member order carries no meaning.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Key/value map with unique string keys.
	Object(HashMap<String, Value>),
	/// Ordered sequence.
	Array(Vec<Value>),
	/// Text scalar.
	String(String),
	/// Numeric scalar.
	Number(f64),
	/// Boolean scalar.
	Bool(bool),
	/// Absence marker.
	Null,
}

/// Variant tag of a [`Value`], used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	/// `Value::Object`.
	Object,
	/// `Value::Array`.
	Array,
	/// `Value::String`.
	String,
	/// `Value::Number`.
	Number,
	/// `Value::Bool`.
	Bool,
	/// `Value::Null`.
	Null,
}

impl ValueKind {
	/// Lowercase label for this kind.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Object => "object",
			Self::Array => "array",
			Self::String => "string",
			Self::Number => "number",
			Self::Bool => "bool",
			Self::Null => "null",
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

pub(crate) static NULL: Value = Value::Null;

impl Value {
	/// Return the variant tag.
	pub fn kind(&self) -> ValueKind {
		match self {
			Self::Object(_) => ValueKind::Object,
			Self::Array(_) => ValueKind::Array,
			Self::String(_) => ValueKind::String,
			Self::Number(_) => ValueKind::Number,
			Self::Bool(_) => ValueKind::Bool,
			Self::Null => ValueKind::Null,
		}
	}

	/// Whether this is `Null`.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Boolean payload, if any.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// String payload, if any.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) => Some(value),
			_ => None,
		}
	}

	/// Numeric payload, if any.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Number(value) => Some(*value),
			_ => None,
		}
	}

	/// Array elements, if any.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Object members, if any.
	pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
		match self {
			Self::Object(members) => Some(members),
			_ => None,
		}
	}

	/// Look up an object member by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.as_object().and_then(|members| members.get(key))
	}

	/// Look up an array element by index.
	pub fn get_index(&self, index: usize) -> Option<&Value> {
		self.as_array().and_then(|items| items.get(index))
	}

	/// Walk `path` from this value and return the addressed subtree.
	pub fn lookup(&self, path: &CodingPath) -> Option<&Value> {
		let mut current = self;
		for segment in path.segments() {
			current = match segment {
				PathSegment::Key(key) => current.get(key)?,
				PathSegment::Index(index) => current.get_index(*index)?,
			};
		}
		Some(current)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Self::Number(f64::from(value))
	}
}

macro_rules! impl_from_small_int {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Self::Number(f64::from(value))
				}
			}
		)*
	};
}

impl_from_small_int!(i8, i16, i32, u8, u16, u32);

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Self::Array(items)
	}
}

impl From<HashMap<String, Value>> for Value {
	fn from(members: HashMap<String, Value>) -> Self {
		Self::Object(members)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl FromIterator<Value> for Value {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		Self::Array(iter.into_iter().collect())
	}
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
	fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
		Self::Object(iter.into_iter().map(|(key, value)| (key.into(), value)).collect())
	}
}
