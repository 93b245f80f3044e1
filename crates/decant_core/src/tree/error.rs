use thiserror::Error;

use crate::tree::{CodingPath, ValueKind};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors produced while decoding typed values out of a value tree.
///
/// Every decoding failure carries the path of the value being examined.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
	/// Value kind does not match the requested read or container.
	#[error("type mismatch at {path}: expected {expected}, found {found}")]
	TypeMismatch {
		/// Location of the offending value.
		path: CodingPath,
		/// Requested kind or target type.
		expected: &'static str,
		/// Actual value kind.
		found: ValueKind,
	},
	/// Keyed read referenced an absent member.
	#[error("key not found at {path}: no value for key {key:?}")]
	KeyNotFound {
		/// Location of the object that was searched.
		path: CodingPath,
		/// Missing member key.
		key: String,
	},
	/// Sequence read or path lookup past the last element.
	#[error("container exhausted at {path}: array has {len} elements")]
	ContainerExhausted {
		/// Location of the requested element. For a sequence cursor this is the one-past-last index.
		path: CodingPath,
		/// Array length.
		len: usize,
	},
	/// Non-optional read found `null` or a missing element shape.
	#[error("value not found at {path}: expected {expected}")]
	ValueNotFound {
		/// Location of the offending value.
		path: CodingPath,
		/// Requested kind or target type.
		expected: &'static str,
	},
	/// Number is not exactly representable in the requested numeric type.
	#[error("number out of range at {path}: {value} is not representable as {target}")]
	NumberOutOfRange {
		/// Location of the offending value.
		path: CodingPath,
		/// Requested numeric type.
		target: &'static str,
		/// Stored number.
		value: f64,
	},
	/// Value matched none of the recognized shapes.
	#[error("unrepresentable value at {path}")]
	Unrepresentable {
		/// Location of the offending value.
		path: CodingPath,
	},
	/// Value has the right shape but is rejected by the target type.
	#[error("data corrupted at {path}: {message}")]
	DataCorrupted {
		/// Location of the offending value.
		path: CodingPath,
		/// Target-provided explanation.
		message: String,
	},
	/// Nesting went deeper than the configured limit.
	#[error("decode depth exceeded at {path} (max={max_depth})")]
	DepthExceeded {
		/// Location where the limit was hit.
		path: CodingPath,
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Path expression syntax is invalid.
	#[error("invalid path: {path:?}")]
	InvalidPath {
		/// Original user-provided path string.
		path: String,
	},
}

impl DecodeError {
	/// Location of the failure, when it happened inside a tree.
	pub fn path(&self) -> Option<&CodingPath> {
		match self {
			Self::TypeMismatch { path, .. }
			| Self::KeyNotFound { path, .. }
			| Self::ContainerExhausted { path, .. }
			| Self::ValueNotFound { path, .. }
			| Self::NumberOutOfRange { path, .. }
			| Self::Unrepresentable { path }
			| Self::DataCorrupted { path, .. }
			| Self::DepthExceeded { path, .. } => Some(path),
			Self::InvalidPath { .. } => None,
		}
	}

	/// Stable snake_case label for the error kind.
	pub fn kind_label(&self) -> &'static str {
		match self {
			Self::TypeMismatch { .. } => "type_mismatch",
			Self::KeyNotFound { .. } => "key_not_found",
			Self::ContainerExhausted { .. } => "container_exhausted",
			Self::ValueNotFound { .. } => "value_not_found",
			Self::NumberOutOfRange { .. } => "number_out_of_range",
			Self::Unrepresentable { .. } => "unrepresentable",
			Self::DataCorrupted { .. } => "data_corrupted",
			Self::DepthExceeded { .. } => "depth_exceeded",
			Self::InvalidPath { .. } => "invalid_path",
		}
	}

	/// Build a [`DecodeError::DataCorrupted`] for a target type that rejects a value.
	pub fn data_corrupted(path: &CodingPath, message: impl Into<String>) -> Self {
		Self::DataCorrupted {
			path: path.clone(),
			message: message.into(),
		}
	}
}
