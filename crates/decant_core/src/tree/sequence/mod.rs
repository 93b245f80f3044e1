use crate::tree::decoder::DecodeContext;
use crate::tree::{CodingKey, CodingPath, DecodeError, DecodeSelf, Decoder, KeyedContainer, Result, Value, ValueKind};

/// Array view with a forward-only cursor.
///
/// Every successful read advances the cursor by one element. Nested reads
/// build fresh containers, so the cursor is never shared.
#[derive(Debug, Clone)]
pub struct SequenceContainer<'a> {
	items: &'a [Value],
	path: CodingPath,
	ctx: DecodeContext<'a>,
	current: usize,
}

impl<'a> SequenceContainer<'a> {
	pub(crate) fn new(items: &'a [Value], path: CodingPath, ctx: DecodeContext<'a>) -> Self {
		Self { items, path, ctx, current: 0 }
	}

	/// Location of the array.
	pub fn path(&self) -> &CodingPath {
		&self.path
	}

	/// Total number of elements.
	pub fn count(&self) -> usize {
		self.items.len()
	}

	/// Elements not yet consumed.
	pub fn remaining_count(&self) -> usize {
		self.items.len() - self.current
	}

	/// Index of the next element to be read.
	pub fn current_index(&self) -> usize {
		self.current
	}

	/// Whether every element has been consumed.
	pub fn is_at_end(&self) -> bool {
		self.current == self.items.len()
	}

	/// Consume the next element if it is `null`.
	///
	/// Returns `false` without advancing otherwise, so a typed read can take
	/// the same element.
	pub fn read_nil(&mut self) -> Result<bool> {
		let item = self.peek()?;
		if item.is_null() {
			self.current += 1;
			return Ok(true);
		}
		Ok(false)
	}

	/// Decode the next element as `T`.
	pub fn read<T: DecodeSelf>(&mut self) -> Result<T> {
		let item = self.peek()?;
		let decoder = Decoder::enter(item, self.element_path(), self.ctx)?;
		let value = T::decode(&decoder)?;
		self.current += 1;
		Ok(value)
	}

	/// Object view over the next element.
	pub fn nested_keyed_container<K: CodingKey>(&mut self) -> Result<KeyedContainer<'a, K>> {
		let item = self.peek()?;
		let Value::Object(members) = item else {
			return Err(self.missing_shape(ValueKind::Object));
		};
		let path = self.element_path();
		self.ctx.enter(&path)?;
		self.current += 1;
		Ok(KeyedContainer::new(members, path, self.ctx))
	}

	/// Array view over the next element.
	pub fn nested_sequence_container(&mut self) -> Result<SequenceContainer<'a>> {
		let item = self.peek()?;
		let Value::Array(items) = item else {
			return Err(self.missing_shape(ValueKind::Array));
		};
		let path = self.element_path();
		self.ctx.enter(&path)?;
		self.current += 1;
		Ok(SequenceContainer::new(items, path, self.ctx))
	}

	/// Full decoder over the next element, for delegating to an embedded representation.
	pub fn delegate_decoder(&mut self) -> Result<Decoder<'a>> {
		let item = self.peek()?;
		let decoder = Decoder::enter(item, self.element_path(), self.ctx)?;
		self.current += 1;
		Ok(decoder)
	}

	fn peek(&self) -> Result<&'a Value> {
		self.items.get(self.current).ok_or_else(|| DecodeError::ContainerExhausted {
			path: self.element_path(),
			len: self.items.len(),
		})
	}

	fn element_path(&self) -> CodingPath {
		self.path.join_index(self.current)
	}

	fn missing_shape(&self, expected: ValueKind) -> DecodeError {
		DecodeError::ValueNotFound {
			path: self.element_path(),
			expected: expected.as_str(),
		}
	}
}
