use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use crate::tree::decoder::DecodeContext;
use crate::tree::value::NULL;
use crate::tree::{CodingKey, CodingPath, DecodeError, DecodeSelf, Decoder, Result, SequenceContainer, Value, ValueKind};

/// Member key looked up by [`KeyedContainer::delegate_decoder`].
pub const SUPER_KEY: &str = "super";

/// Object view addressed by key.
///
/// `K` only controls which members [`all_keys`](Self::all_keys) reports; every
/// lookup accepts any [`CodingKey`], including a raw `str`.
pub struct KeyedContainer<'a, K> {
	members: &'a HashMap<String, Value>,
	path: CodingPath,
	ctx: DecodeContext<'a>,
	_key: PhantomData<fn() -> K>,
}

impl<'a, K: CodingKey> KeyedContainer<'a, K> {
	pub(crate) fn new(members: &'a HashMap<String, Value>, path: CodingPath, ctx: DecodeContext<'a>) -> Self {
		Self {
			members,
			path,
			ctx,
			_key: PhantomData,
		}
	}

	/// Location of the object.
	pub fn path(&self) -> &CodingPath {
		&self.path
	}

	/// Number of members, recognized by `K` or not.
	pub fn member_count(&self) -> usize {
		self.members.len()
	}

	/// Member keys that parse into `K`. Unrecognized members are skipped.
	pub fn all_keys(&self) -> Vec<K> {
		self.members.keys().filter_map(|key| K::from_key_str(key)).collect()
	}

	/// Whether a member named `key` exists.
	pub fn contains<Q: CodingKey + ?Sized>(&self, key: &Q) -> bool {
		self.members.contains_key(key.key_str())
	}

	/// Whether the member named `key` is `null`. Fails when it is absent.
	pub fn read_nil<Q: CodingKey + ?Sized>(&self, key: &Q) -> Result<bool> {
		self.member(key).map(Value::is_null)
	}

	/// Decode the member named `key` as `T`.
	pub fn read<T: DecodeSelf, Q: CodingKey + ?Sized>(&self, key: &Q) -> Result<T> {
		let member = self.member(key)?;
		let decoder = Decoder::enter(member, self.path.join_key(key.key_str()), self.ctx)?;
		T::decode(&decoder)
	}

	/// Decode the member named `key`, treating an absent or `null` member as `None`.
	pub fn read_if_present<T: DecodeSelf, Q: CodingKey + ?Sized>(&self, key: &Q) -> Result<Option<T>> {
		match self.members.get(key.key_str()) {
			None | Some(Value::Null) => Ok(None),
			Some(_) => self.read(key).map(Some),
		}
	}

	/// Object view over the member named `key`.
	pub fn nested_keyed_container<NK: CodingKey, Q: CodingKey + ?Sized>(&self, key: &Q) -> Result<KeyedContainer<'a, NK>> {
		let member = self.member(key)?;
		let path = self.path.join_key(key.key_str());
		let Value::Object(members) = member else {
			return Err(DecodeError::TypeMismatch {
				path,
				expected: ValueKind::Object.as_str(),
				found: member.kind(),
			});
		};
		self.ctx.enter(&path)?;
		Ok(KeyedContainer::new(members, path, self.ctx))
	}

	/// Array view over the member named `key`.
	pub fn nested_sequence_container<Q: CodingKey + ?Sized>(&self, key: &Q) -> Result<SequenceContainer<'a>> {
		let member = self.member(key)?;
		let path = self.path.join_key(key.key_str());
		let Value::Array(items) = member else {
			return Err(DecodeError::TypeMismatch {
				path,
				expected: ValueKind::Array.as_str(),
				found: member.kind(),
			});
		};
		self.ctx.enter(&path)?;
		Ok(SequenceContainer::new(items, path, self.ctx))
	}

	/// Decoder over the reserved `"super"` member, or over `null` when it is absent.
	pub fn delegate_decoder(&self) -> Result<Decoder<'a>> {
		self.delegate_decoder_for_key(SUPER_KEY)
	}

	/// Decoder over the member named `key`, or over `null` when it is absent.
	pub fn delegate_decoder_for_key<Q: CodingKey + ?Sized>(&self, key: &Q) -> Result<Decoder<'a>> {
		let member = self.members.get(key.key_str()).unwrap_or(&NULL);
		Decoder::enter(member, self.path.join_key(key.key_str()), self.ctx)
	}

	fn member<Q: CodingKey + ?Sized>(&self, key: &Q) -> Result<&'a Value> {
		self.members.get(key.key_str()).ok_or_else(|| DecodeError::KeyNotFound {
			path: self.path.clone(),
			key: key.key_str().to_owned(),
		})
	}
}

impl<K> Clone for KeyedContainer<'_, K> {
	fn clone(&self) -> Self {
		Self {
			members: self.members,
			path: self.path.clone(),
			ctx: self.ctx,
			_key: PhantomData,
		}
	}
}

impl<K> fmt::Debug for KeyedContainer<'_, K> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("KeyedContainer")
			.field("path", &self.path)
			.field("members", &self.members.len())
			.finish()
	}
}
