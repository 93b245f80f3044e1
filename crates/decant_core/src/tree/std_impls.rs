use std::collections::{BTreeMap, HashMap};

use crate::tree::{DecodeError, DecodeSelf, Decoder, Result, Value};

impl DecodeSelf for bool {
	fn decode(decoder: &Decoder<'_>) -> Result<Self> {
		decoder.single_value_container().read_bool()
	}
}

impl DecodeSelf for String {
	fn decode(decoder: &Decoder<'_>) -> Result<Self> {
		decoder.single_value_container().read_string()
	}
}

macro_rules! impl_decode_float {
	($($ty:ty),*) => {
		$(
			impl DecodeSelf for $ty {
				fn decode(decoder: &Decoder<'_>) -> Result<Self> {
					decoder.single_value_container().read_float()
				}
			}
		)*
	};
}

macro_rules! impl_decode_integer {
	($($ty:ty),*) => {
		$(
			impl DecodeSelf for $ty {
				fn decode(decoder: &Decoder<'_>) -> Result<Self> {
					decoder.single_value_container().read_integer()
				}
			}
		)*
	};
}

impl_decode_float!(f32, f64);
impl_decode_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: DecodeSelf> DecodeSelf for Option<T> {
	fn decode(decoder: &Decoder<'_>) -> Result<Self> {
		if decoder.single_value_container().is_null() {
			return Ok(None);
		}
		T::decode(decoder).map(Some)
	}
}

impl<T: DecodeSelf> DecodeSelf for Box<T> {
	fn decode(decoder: &Decoder<'_>) -> Result<Self> {
		T::decode(decoder).map(Box::new)
	}
}

impl<T: DecodeSelf> DecodeSelf for Vec<T> {
	fn decode(decoder: &Decoder<'_>) -> Result<Self> {
		let mut container = decoder.sequence_container()?;
		let mut out = Vec::with_capacity(container.count());
		while !container.is_at_end() {
			out.push(container.read()?);
		}
		Ok(out)
	}
}

impl<T: DecodeSelf> DecodeSelf for HashMap<String, T> {
	fn decode(decoder: &Decoder<'_>) -> Result<Self> {
		let container = decoder.keyed_container::<String>()?;
		let mut out = HashMap::with_capacity(container.member_count());
		for key in container.all_keys() {
			let member = container.read(&key)?;
			out.insert(key, member);
		}
		Ok(out)
	}
}

impl<T: DecodeSelf> DecodeSelf for BTreeMap<String, T> {
	fn decode(decoder: &Decoder<'_>) -> Result<Self> {
		let container = decoder.keyed_container::<String>()?;
		let mut out = BTreeMap::new();
		for key in container.all_keys() {
			let member = container.read(&key)?;
			out.insert(key, member);
		}
		Ok(out)
	}
}

/// Rebuilds the tree through the container API, so decoding into `Value` is the identity.
impl DecodeSelf for Value {
	fn decode(decoder: &Decoder<'_>) -> Result<Self> {
		if decoder.keyed_container::<String>().is_ok() {
			return HashMap::<String, Value>::decode(decoder).map(Value::Object);
		}
		if decoder.sequence_container().is_ok() {
			return Vec::<Value>::decode(decoder).map(Value::Array);
		}

		let container = decoder.single_value_container();
		if let Ok(value) = container.read_bool() {
			Ok(Value::Bool(value))
		} else if let Ok(value) = container.read_string() {
			Ok(Value::String(value))
		} else if let Ok(value) = container.read_float::<f64>() {
			Ok(Value::Number(value))
		} else if container.is_null() {
			Ok(Value::Null)
		} else {
			Err(DecodeError::Unrepresentable {
				path: decoder.path().clone(),
			})
		}
	}
}
