mod decoder;
mod error;
mod json;
mod key;
mod keyed;
mod number;
mod path;
mod sequence;
mod single;
mod std_impls;
mod user_info;
mod value;

/// Decoder handle, entry point, options, and the target-type contract.
pub use decoder::{DecodeOptions, DecodeSelf, Decoder, ValueDecoder, decode};
/// Error and result aliases.
pub use error::{DecodeError, Result};
/// Key types for keyed containers.
pub use key::CodingKey;
/// Object access container and its reserved delegate key.
pub use keyed::{KeyedContainer, SUPER_KEY};
/// Numeric read targets.
pub use number::{FloatTarget, IntegerTarget};
/// Location tracking types.
pub use path::{CodingPath, PathSegment};
/// Array access container.
pub use sequence::SequenceContainer;
/// Scalar access container.
pub use single::SingleValueContainer;
/// Opaque caller-supplied side-channel data.
pub use user_info::UserInfo;
/// Dynamic value tree types.
pub use value::{Value, ValueKind};
