//! Adapters between [`Value`] and the `serde`/`serde_json` ecosystem.
//!
//! Text parsing and re-encoding live in `serde_json`; this module only maps
//! between its data model and ours.

use std::collections::HashMap;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::tree::Value;

/// Largest magnitude below which every integral `f64` is exact.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Integral numbers inside the exact `f64` range, as `i64`.
fn as_safe_integer(number: f64) -> Option<i64> {
	(number.fract() == 0.0 && number.abs() < MAX_SAFE_INTEGER).then_some(number as i64)
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(b) => Value::Bool(b),
			// Without arbitrary precision every JSON number has an f64 view.
			serde_json::Value::Number(num) => num.as_f64().map_or(Value::Null, Value::Number),
			serde_json::Value::String(s) => Value::String(s),
			serde_json::Value::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
			serde_json::Value::Object(members) => Value::Object(members.into_iter().map(|(k, v)| (k, Value::from(v))).collect()),
		}
	}
}

impl From<&Value> for serde_json::Value {
	fn from(value: &Value) -> Self {
		match value {
			Value::Null => serde_json::Value::Null,
			Value::Bool(b) => serde_json::Value::Bool(*b),
			Value::Number(n) => match as_safe_integer(*n) {
				Some(int) => serde_json::Value::from(int),
				None => serde_json::Number::from_f64(*n).map_or(serde_json::Value::Null, serde_json::Value::Number),
			},
			Value::String(s) => serde_json::Value::String(s.clone()),
			Value::Array(items) => serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect()),
			Value::Object(members) => serde_json::Value::Object(members.iter().map(|(k, v)| (k.clone(), serde_json::Value::from(v))).collect()),
		}
	}
}

impl From<Value> for serde_json::Value {
	fn from(value: Value) -> Self {
		serde_json::Value::from(&value)
	}
}

impl Serialize for Value {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			Value::Object(members) => serializer.collect_map(members),
			Value::Array(items) => serializer.collect_seq(items),
			Value::String(s) => serializer.serialize_str(s),
			Value::Number(n) => match as_safe_integer(*n) {
				Some(int) => serializer.serialize_i64(int),
				None => serializer.serialize_f64(*n),
			},
			Value::Bool(b) => serializer.serialize_bool(*b),
			Value::Null => serializer.serialize_unit(),
		}
	}
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
	type Value = Value;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("any JSON value")
	}

	fn visit_bool<E: de::Error>(self, value: bool) -> std::result::Result<Value, E> {
		Ok(Value::Bool(value))
	}

	fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Value, E> {
		Ok(Value::Number(value as f64))
	}

	fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Value, E> {
		Ok(Value::Number(value as f64))
	}

	fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Value, E> {
		Ok(Value::Number(value))
	}

	fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Value, E> {
		Ok(Value::String(value.to_owned()))
	}

	fn visit_string<E: de::Error>(self, value: String) -> std::result::Result<Value, E> {
		Ok(Value::String(value))
	}

	fn visit_none<E: de::Error>(self) -> std::result::Result<Value, E> {
		Ok(Value::Null)
	}

	fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> std::result::Result<Value, D::Error> {
		Deserialize::deserialize(deserializer)
	}

	fn visit_unit<E: de::Error>(self) -> std::result::Result<Value, E> {
		Ok(Value::Null)
	}

	fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Value, A::Error> {
		let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
		while let Some(item) = seq.next_element()? {
			items.push(item);
		}
		Ok(Value::Array(items))
	}

	fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Value, A::Error> {
		let mut members = HashMap::with_capacity(map.size_hint().unwrap_or(0));
		while let Some((key, value)) = map.next_entry::<String, Value>()? {
			members.insert(key, value);
		}
		Ok(Value::Object(members))
	}
}

impl<'de> Deserialize<'de> for Value {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(ValueVisitor)
	}
}
