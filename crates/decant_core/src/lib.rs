//! Decode strongly-typed values out of a dynamic, JSON-shaped value tree.

/// Value tree data model, typed decoding engine, and parser interop.
pub mod tree;
