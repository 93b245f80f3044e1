use crate::tree::decoder::DecodeContext;
use crate::tree::{CodingPath, DecodeError, DecodeSelf, Decoder, FloatTarget, IntegerTarget, Result, Value};

/// Scalar view over one value.
///
/// Reading `null` where a value is demanded is a [`DecodeError::ValueNotFound`];
/// any other kind mismatch is a [`DecodeError::TypeMismatch`].
#[derive(Debug, Clone)]
pub struct SingleValueContainer<'a> {
	value: &'a Value,
	path: CodingPath,
	ctx: DecodeContext<'a>,
}

impl<'a> SingleValueContainer<'a> {
	pub(crate) fn new(value: &'a Value, path: CodingPath, ctx: DecodeContext<'a>) -> Self {
		Self { value, path, ctx }
	}

	/// Location of the underlying value.
	pub fn path(&self) -> &CodingPath {
		&self.path
	}

	/// Whether the value is `null`.
	pub fn is_null(&self) -> bool {
		self.value.is_null()
	}

	/// Read a boolean.
	pub fn read_bool(&self) -> Result<bool> {
		match self.value {
			Value::Bool(value) => Ok(*value),
			_ => Err(self.mismatch("bool")),
		}
	}

	/// Read a string, borrowing it from the tree.
	pub fn read_str(&self) -> Result<&'a str> {
		match self.value {
			Value::String(value) => Ok(value),
			_ => Err(self.mismatch("string")),
		}
	}

	/// Read an owned string.
	pub fn read_string(&self) -> Result<String> {
		self.read_str().map(str::to_owned)
	}

	/// Read a number into a floating-point type. Narrowing never fails.
	pub fn read_float<F: FloatTarget>(&self) -> Result<F> {
		match self.value {
			Value::Number(value) => Ok(F::from_number(*value)),
			_ => Err(self.mismatch(F::NAME)),
		}
	}

	/// Read a number into an integer type, requiring an exact conversion.
	pub fn read_integer<I: IntegerTarget>(&self) -> Result<I> {
		match self.value {
			Value::Number(value) => I::from_number_exact(*value).ok_or_else(|| DecodeError::NumberOutOfRange {
				path: self.path.clone(),
				target: I::NAME,
				value: *value,
			}),
			_ => Err(self.mismatch(I::NAME)),
		}
	}

	/// Decode any target type from this same value and path.
	pub fn read<T: DecodeSelf>(&self) -> Result<T> {
		let decoder = Decoder::enter(self.value, self.path.clone(), self.ctx)?;
		T::decode(&decoder)
	}

	fn mismatch(&self, expected: &'static str) -> DecodeError {
		match self.value {
			Value::Null => DecodeError::ValueNotFound {
				path: self.path.clone(),
				expected,
			},
			other => DecodeError::TypeMismatch {
				path: self.path.clone(),
				expected,
				found: other.kind(),
			},
		}
	}
}
