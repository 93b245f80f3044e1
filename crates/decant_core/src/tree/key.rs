/// Key type of a keyed container.
///
/// `from_key_str` decides which object members show up in
/// [`KeyedContainer::all_keys`](crate::tree::KeyedContainer::all_keys); members it
/// rejects are still reachable by raw key.
pub trait CodingKey {
	/// Object member name this key addresses.
	fn key_str(&self) -> &str;

	/// Parse a member name into this key type. Recognizes nothing unless overridden.
	fn from_key_str(key: &str) -> Option<Self>
	where
		Self: Sized,
	{
		let _ = key;
		None
	}
}

impl CodingKey for String {
	fn key_str(&self) -> &str {
		self
	}

	fn from_key_str(key: &str) -> Option<Self> {
		Some(key.to_owned())
	}
}

impl CodingKey for str {
	fn key_str(&self) -> &str {
		self
	}
}
