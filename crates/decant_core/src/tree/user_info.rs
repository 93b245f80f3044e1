use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

/// Caller-supplied side-channel data, keyed by type.
///
/// Passed unchanged to every decoder and container of one decode call. The
/// engine never reads it.
#[derive(Default)]
pub struct UserInfo {
	entries: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl UserInfo {
	/// Empty bag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Store `value`, returning the previous value of the same type.
	pub fn insert<T: Any + Send + Sync>(&mut self, value: T) -> Option<T> {
		self.entries
			.insert(TypeId::of::<T>(), Box::new(value))
			.and_then(|previous| previous.downcast::<T>().ok())
			.map(|previous| *previous)
	}

	/// Borrow the stored value of type `T`.
	pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
		self.entries.get(&TypeId::of::<T>()).and_then(|value| value.downcast_ref::<T>())
	}

	/// Whether a value of type `T` is stored.
	pub fn contains<T: Any + Send + Sync>(&self) -> bool {
		self.entries.contains_key(&TypeId::of::<T>())
	}

	/// Remove and return the stored value of type `T`.
	pub fn remove<T: Any + Send + Sync>(&mut self) -> Option<T> {
		self.entries
			.remove(&TypeId::of::<T>())
			.and_then(|value| value.downcast::<T>().ok())
			.map(|value| *value)
	}

	/// Number of stored entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether nothing is stored.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl fmt::Debug for UserInfo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("UserInfo").field("entries", &self.entries.len()).finish()
	}
}
