use std::any::type_name;

use crate::tree::{
	CodingKey, CodingPath, DecodeError, KeyedContainer, PathSegment, Result, SequenceContainer, SingleValueContainer, UserInfo, Value, ValueKind,
};

/// Target-type contract: populate `Self` by issuing reads against a [`Decoder`].
///
/// Implementations pick one of the decoder's three container shapes and pull
/// their fields out of it. Nested fields recurse through `read` calls, which
/// dispatch back into `DecodeSelf` for the field type.
pub trait DecodeSelf: Sized {
	/// Decode a value of this type from `decoder`.
	fn decode(decoder: &Decoder<'_>) -> Result<Self>;
}

/// Runtime limits for one decode call.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum path length a nested decoder or container may reach.
	pub max_depth: u32,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self { max_depth: 512 }
	}
}

impl DecodeOptions {
	/// Preset for flat configuration-style documents.
	pub fn shallow() -> Self {
		Self { max_depth: 32 }
	}
}

/// Per-call state shared by every decoder and container of one decode.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DecodeContext<'a> {
	pub(crate) user_info: &'a UserInfo,
	pub(crate) max_depth: u32,
}

impl DecodeContext<'_> {
	/// Check that `path` stays within the configured depth.
	pub(crate) fn enter(&self, path: &CodingPath) -> Result<()> {
		if path.len() > self.max_depth as usize {
			return Err(DecodeError::DepthExceeded {
				path: path.clone(),
				max_depth: self.max_depth,
			});
		}
		Ok(())
	}
}

/// View over one value of the tree, handed to [`DecodeSelf::decode`].
///
/// Any number of containers may be requested from the same decoder; each one
/// is checked against the value's kind independently.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
	value: &'a Value,
	path: CodingPath,
	ctx: DecodeContext<'a>,
}

impl<'a> Decoder<'a> {
	/// Decoder for a child value at `path`, subject to the depth limit.
	pub(crate) fn enter(value: &'a Value, path: CodingPath, ctx: DecodeContext<'a>) -> Result<Self> {
		ctx.enter(&path)?;
		Ok(Self { value, path, ctx })
	}

	/// Underlying value.
	pub fn value(&self) -> &'a Value {
		self.value
	}

	/// Location of the underlying value.
	pub fn path(&self) -> &CodingPath {
		&self.path
	}

	/// Side-channel data supplied by the caller.
	pub fn user_info(&self) -> &'a UserInfo {
		self.ctx.user_info
	}

	/// Object view keyed by `K`; fails with a type mismatch for non-objects.
	pub fn keyed_container<K: CodingKey>(&self) -> Result<KeyedContainer<'a, K>> {
		match self.value {
			Value::Object(members) => Ok(KeyedContainer::new(members, self.path.clone(), self.ctx)),
			other => Err(DecodeError::TypeMismatch {
				path: self.path.clone(),
				expected: ValueKind::Object.as_str(),
				found: other.kind(),
			}),
		}
	}

	/// Array view; fails with a type mismatch for non-arrays.
	pub fn sequence_container(&self) -> Result<SequenceContainer<'a>> {
		match self.value {
			Value::Array(items) => Ok(SequenceContainer::new(items, self.path.clone(), self.ctx)),
			other => Err(DecodeError::TypeMismatch {
				path: self.path.clone(),
				expected: ValueKind::Array.as_str(),
				found: other.kind(),
			}),
		}
	}

	/// Scalar view. Always succeeds; each read checks the shape.
	pub fn single_value_container(&self) -> SingleValueContainer<'a> {
		SingleValueContainer::new(self.value, self.path.clone(), self.ctx)
	}

	/// Decode `T` from this decoder.
	pub fn decode<T: DecodeSelf>(&self) -> Result<T> {
		T::decode(self)
	}
}

/// Public entry point: decodes target types out of value trees.
#[derive(Debug, Default)]
pub struct ValueDecoder {
	/// Limits applied to every decode call.
	pub options: DecodeOptions,
	user_info: UserInfo,
}

impl ValueDecoder {
	/// Decoder with default options and an empty side-channel.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the decode options.
	pub fn with_options(mut self, options: DecodeOptions) -> Self {
		self.options = options;
		self
	}

	/// Replace the side-channel data.
	pub fn with_user_info(mut self, user_info: UserInfo) -> Self {
		self.user_info = user_info;
		self
	}

	/// Side-channel data passed to every decoder.
	pub fn user_info(&self) -> &UserInfo {
		&self.user_info
	}

	/// Mutable access to the side-channel data.
	pub fn user_info_mut(&mut self) -> &mut UserInfo {
		&mut self.user_info
	}

	/// Decode `T` from `value`.
	pub fn decode<T: DecodeSelf>(&self, value: &Value) -> Result<T> {
		self.decode_with(value, T::decode)
	}

	/// Drive `decode` against a root decoder over `value`.
	///
	/// Useful when the target is chosen at run time rather than by a type.
	pub fn decode_with<T, F>(&self, value: &Value, decode: F) -> Result<T>
	where
		F: FnOnce(&Decoder<'_>) -> Result<T>,
	{
		self.run(value, CodingPath::root(), decode)
	}

	/// Decode `T` from the subtree of `root` at `path`.
	///
	/// Errors, including a path that does not resolve, are reported with
	/// locations measured from `root`.
	pub fn decode_at<T: DecodeSelf>(&self, root: &Value, path: &CodingPath) -> Result<T> {
		self.decode_at_with(root, path, T::decode)
	}

	/// Drive `decode` against a decoder positioned at `path` inside `root`.
	pub fn decode_at_with<T, F>(&self, root: &Value, path: &CodingPath, decode: F) -> Result<T>
	where
		F: FnOnce(&Decoder<'_>) -> Result<T>,
	{
		let value = locate(root, path)?;
		self.run(value, path.clone(), decode)
	}

	fn run<T, F>(&self, value: &Value, path: CodingPath, decode: F) -> Result<T>
	where
		F: FnOnce(&Decoder<'_>) -> Result<T>,
	{
		tracing::trace!(target_type = type_name::<T>(), root = %path, kind = %value.kind(), "decoding value tree");

		let ctx = DecodeContext {
			user_info: &self.user_info,
			max_depth: self.options.max_depth,
		};
		let result = Decoder::enter(value, path, ctx).and_then(|decoder| decode(&decoder));

		if let Err(err) = &result {
			tracing::debug!(target_type = type_name::<T>(), kind = err.kind_label(), "decode failed: {err}");
		}
		result
	}
}

/// Decode `T` from `value` with default options.
pub fn decode<T: DecodeSelf>(value: &Value) -> Result<T> {
	ValueDecoder::new().decode(value)
}

fn locate<'v>(root: &'v Value, path: &CodingPath) -> Result<&'v Value> {
	let mut current = root;
	let mut walked = CodingPath::root();

	for segment in path.segments() {
		current = match (segment, current) {
			(PathSegment::Key(key), Value::Object(members)) => members.get(key).ok_or_else(|| DecodeError::KeyNotFound {
				path: walked.clone(),
				key: key.clone(),
			})?,
			(PathSegment::Index(index), Value::Array(items)) => items.get(*index).ok_or_else(|| DecodeError::ContainerExhausted {
				path: walked.join_index(*index),
				len: items.len(),
			})?,
			(PathSegment::Key(_), other) => {
				return Err(DecodeError::TypeMismatch {
					path: walked,
					expected: ValueKind::Object.as_str(),
					found: other.kind(),
				});
			}
			(PathSegment::Index(_), other) => {
				return Err(DecodeError::TypeMismatch {
					path: walked,
					expected: ValueKind::Array.as_str(),
					found: other.kind(),
				});
			}
		};
		walked = walked.join(segment.clone());
	}

	Ok(current)
}

#[cfg(test)]
mod tests;
