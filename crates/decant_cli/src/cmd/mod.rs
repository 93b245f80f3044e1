/// Shape-driven decode command.
pub mod decode;
/// Value tree inspection command.
pub mod inspect;

mod error;
mod print;
mod shape;
mod util;

#[cfg(test)]
mod test_support;

pub use error::{CliError, Result};
