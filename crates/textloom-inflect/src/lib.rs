//! Deterministic English inflection for identifier derivation.
//!
//! Generators derive stable identifiers from schema field names by
//! converting nouns between singular and plural form. The rule tables are
//! ordered, immutable once built, and the conversions are total: every
//! input maps to an output, with a catch-all rule as the last resort.

pub mod inflector;
pub mod rules;

pub use inflector::{Inflector, InflectorBuilder, RuleError};
pub use rules::InflectionRule;
