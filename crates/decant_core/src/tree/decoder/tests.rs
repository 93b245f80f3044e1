use serde_json::json;

use crate::tree::{
	CodingKey, CodingPath, DecodeError, DecodeOptions, DecodeSelf, Decoder, Result, UserInfo, Value, ValueDecoder, ValueKind, decode,
};

fn tree(value: serde_json::Value) -> Value {
	Value::from(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
	BoolField,
	NumberField,
	StringField,
	ArrayField,
}

impl CodingKey for Field {
	fn key_str(&self) -> &str {
		match self {
			Self::BoolField => "boolField",
			Self::NumberField => "numberField",
			Self::StringField => "stringField",
			Self::ArrayField => "arrayField",
		}
	}

	fn from_key_str(key: &str) -> Option<Self> {
		match key {
			"boolField" => Some(Self::BoolField),
			"numberField" => Some(Self::NumberField),
			"stringField" => Some(Self::StringField),
			"arrayField" => Some(Self::ArrayField),
			_ => None,
		}
	}
}

#[derive(Debug, PartialEq)]
struct Record {
	bool_field: bool,
	number_field: f64,
	string_field: String,
	array_field: Vec<String>,
}

impl DecodeSelf for Record {
	fn decode(decoder: &Decoder<'_>) -> Result<Self> {
		let container = decoder.keyed_container::<Field>()?;
		Ok(Self {
			bool_field: container.read(&Field::BoolField)?,
			number_field: container.read(&Field::NumberField)?,
			string_field: container.read(&Field::StringField)?,
			array_field: container.read(&Field::ArrayField)?,
		})
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flavor {
	Foo,
	Bar,
	Baz,
}

impl DecodeSelf for Flavor {
	fn decode(decoder: &Decoder<'_>) -> Result<Self> {
		match decoder.single_value_container().read_str()? {
			"foo" => Ok(Self::Foo),
			"bar" => Ok(Self::Bar),
			"baz" => Ok(Self::Baz),
			other => Err(DecodeError::data_corrupted(decoder.path(), format!("unknown flavor {other:?}"))),
		}
	}
}

struct OnlyKeyed;

impl DecodeSelf for OnlyKeyed {
	fn decode(decoder: &Decoder<'_>) -> Result<Self> {
		decoder.keyed_container::<String>()?;
		Ok(Self)
	}
}

struct OnlySequence;

impl DecodeSelf for OnlySequence {
	fn decode(decoder: &Decoder<'_>) -> Result<Self> {
		decoder.sequence_container()?;
		Ok(Self)
	}
}

#[test]
fn decoding_into_value_is_identity() {
	let samples = [
		json!(null),
		json!(true),
		json!(-12.75),
		json!("text"),
		json!([]),
		json!({}),
		json!({"null": null, "bool": true, "number": 13, "string": "hi", "array": [null, true, 13, "hi", {"deep": [[]]}]}),
	];

	for sample in samples {
		let value = tree(sample);
		let decoded: Value = decode(&value).expect("value decodes into itself");
		assert_eq!(decoded, value);
	}
}

#[test]
fn keyed_container_from_array_is_type_mismatch() {
	let err = decode::<OnlyKeyed>(&tree(json!([1, 2, 3]))).err().expect("array is not an object");
	assert_eq!(
		err,
		DecodeError::TypeMismatch {
			path: CodingPath::root(),
			expected: "object",
			found: ValueKind::Array,
		}
	);
}

#[test]
fn sequence_container_from_object_is_type_mismatch() {
	let err = decode::<OnlySequence>(&tree(json!({"key": "value"}))).err().expect("object is not an array");
	assert_eq!(
		err,
		DecodeError::TypeMismatch {
			path: CodingPath::root(),
			expected: "array",
			found: ValueKind::Object,
		}
	);
}

#[test]
fn decodes_record_with_nested_array() {
	let value = tree(json!({
		"boolField": true,
		"numberField": 13,
		"stringField": "yo",
		"arrayField": ["hello", "world"],
	}));

	let decoded: Record = decode(&value).expect("record decodes");
	assert_eq!(
		decoded,
		Record {
			bool_field: true,
			number_field: 13.0,
			string_field: "yo".to_owned(),
			array_field: vec!["hello".to_owned(), "world".to_owned()],
		}
	);
}

#[test]
fn record_errors_carry_member_path() {
	let value = tree(json!({
		"boolField": true,
		"numberField": 13,
		"stringField": "yo",
		"arrayField": ["hello", 5],
	}));

	let err = decode::<Record>(&value).err().expect("second array element is not a string");
	assert_eq!(err.path().map(ToString::to_string).as_deref(), Some("arrayField[1]"));
	assert!(matches!(err, DecodeError::TypeMismatch { expected: "string", found: ValueKind::Number, .. }));
}

#[test]
fn record_missing_member_is_key_not_found() {
	let value = tree(json!({"boolField": true, "numberField": 1, "stringField": "x"}));
	let err = decode::<Record>(&value).err().expect("arrayField is absent");
	assert_eq!(
		err,
		DecodeError::KeyNotFound {
			path: CodingPath::root(),
			key: "arrayField".to_owned(),
		}
	);
}

#[test]
fn decodes_enum_array() {
	let decoded: Vec<Flavor> = decode(&tree(json!(["bar", "baz", "foo"]))).expect("flavors decode");
	assert_eq!(decoded, vec![Flavor::Bar, Flavor::Baz, Flavor::Foo]);
}

#[test]
fn unknown_enum_tag_is_data_corrupted() {
	let err = decode::<Vec<Flavor>>(&tree(json!(["bar", "qux"]))).err().expect("qux is not a flavor");
	assert_eq!(err.kind_label(), "data_corrupted");
	assert_eq!(err.path(), Some(&CodingPath::root().join_index(1)));
}

#[derive(Debug, PartialEq)]
struct Scale(f64);

struct Scaled(f64);

impl DecodeSelf for Scaled {
	fn decode(decoder: &Decoder<'_>) -> Result<Self> {
		let factor = decoder.user_info().get::<Scale>().map_or(1.0, |scale| scale.0);
		let raw: f64 = decoder.decode()?;
		Ok(Self(raw * factor))
	}
}

#[test]
fn user_info_reaches_nested_decoders() {
	let mut user_info = UserInfo::new();
	user_info.insert(Scale(10.0));
	let decoder = ValueDecoder::new().with_user_info(user_info);

	let decoded: Vec<Vec<Scaled>> = decoder.decode(&tree(json!([[1, 2], [3]]))).expect("scaled values decode");
	let flat: Vec<f64> = decoded.into_iter().flatten().map(|item| item.0).collect();
	assert_eq!(flat, vec![10.0, 20.0, 30.0]);
	assert!(decoder.user_info().contains::<Scale>());
}

#[test]
fn user_info_can_be_edited_in_place() {
	let mut decoder = ValueDecoder::new();
	decoder.user_info_mut().insert(Scale(0.5));

	let decoded: Scaled = decoder.decode(&tree(json!(8))).expect("scaled value decodes");
	assert_eq!(decoded.0, 4.0);
}

#[test]
fn depth_limit_stops_deep_trees() {
	let value = tree(json!([[[[1]]]]));
	let decoder = ValueDecoder::new().with_options(DecodeOptions { max_depth: 2 });

	let err = decoder.decode::<Value>(&value).err().expect("tree is deeper than two levels");
	assert_eq!(
		err,
		DecodeError::DepthExceeded {
			path: CodingPath::parse("[0][0][0]").expect("path parses"),
			max_depth: 2,
		}
	);

	let shallow = ValueDecoder::new().with_options(DecodeOptions::shallow());
	assert_eq!(shallow.decode::<Value>(&value).expect("fits shallow preset"), value);
}

#[test]
fn decode_at_reports_paths_from_root() {
	let value = tree(json!({"outer": {"items": [1, 2, 300]}}));
	let decoder = ValueDecoder::new();

	let items: Vec<u16> = decoder
		.decode_at(&value, &CodingPath::parse("outer.items").expect("path parses"))
		.expect("subtree decodes");
	assert_eq!(items, vec![1, 2, 300]);

	let err = decoder
		.decode_at::<Vec<u8>>(&value, &CodingPath::parse("outer.items").expect("path parses"))
		.err()
		.expect("300 does not fit u8");
	assert_eq!(
		err,
		DecodeError::NumberOutOfRange {
			path: CodingPath::parse("outer.items[2]").expect("path parses"),
			target: "u8",
			value: 300.0,
		}
	);
}

#[test]
fn decode_at_rejects_unresolvable_paths() {
	let value = tree(json!({"outer": {"items": [1]}}));
	let decoder = ValueDecoder::new();

	let missing = decoder
		.decode_at::<Value>(&value, &CodingPath::parse("outer.nope").expect("path parses"))
		.err()
		.expect("key is absent");
	assert_eq!(
		missing,
		DecodeError::KeyNotFound {
			path: CodingPath::root().join_key("outer"),
			key: "nope".to_owned(),
		}
	);

	let past_end = decoder
		.decode_at::<Value>(&value, &CodingPath::parse("outer.items[4]").expect("path parses"))
		.err()
		.expect("index is past the end");
	assert_eq!(
		past_end,
		DecodeError::ContainerExhausted {
			path: CodingPath::parse("outer.items[4]").expect("path parses"),
			len: 1,
		}
	);

	let wrong_shape = decoder
		.decode_at::<Value>(&value, &CodingPath::parse("outer[0]").expect("path parses"))
		.err()
		.expect("outer is not an array");
	assert!(matches!(wrong_shape, DecodeError::TypeMismatch { expected: "array", found: ValueKind::Object, .. }));
}

#[test]
fn decode_with_runs_closure_against_root() {
	let value = tree(json!({"a": 1, "b": 2}));
	let total = ValueDecoder::new()
		.decode_with(&value, |decoder| {
			let container = decoder.keyed_container::<String>()?;
			let mut sum = 0_i64;
			for key in container.all_keys() {
				sum += container.read::<i64, _>(&key)?;
			}
			Ok(sum)
		})
		.expect("closure decodes");
	assert_eq!(total, 3);
}

#[test]
fn decoder_hands_out_independent_containers() {
	let value = tree(json!([true]));
	let total = ValueDecoder::new()
		.decode_with(&value, |decoder| {
			let mut first = decoder.sequence_container()?;
			let mut second = decoder.sequence_container()?;
			let a: bool = first.read()?;
			let b: bool = second.read()?;
			assert!(first.is_at_end() && second.is_at_end());
			assert!(decoder.keyed_container::<String>().is_err());
			Ok(a && b)
		})
		.expect("both containers read the same element");
	assert!(total);
}
