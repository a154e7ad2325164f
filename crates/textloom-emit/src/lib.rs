//! Composable text assembly for generated source files.
//!
//! Generators build one output file per run by appending fragments to a
//! [`TextBuilder`]: literals, nested fragments spliced at the current
//! indentation, and conditional pieces that vanish cleanly (no stray blank
//! lines, no trailing whitespace) when they have nothing to say.

pub mod builder;

pub use builder::{DEFAULT_SEPARATOR, DOC_PREFIX, TextBuilder};
