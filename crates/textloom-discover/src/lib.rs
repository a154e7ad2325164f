//! Document discovery from include/exclude path patterns.
//!
//! A codegen run is fed a list of pattern strings (`*` shallow wildcard,
//! `?` single character, `{a,b}` alternation, `**` recursive descent,
//! leading `!` exclusion) and resolves them against the file system into
//! the deduplicated set of input documents to compile.

pub mod errors;
pub mod expand;
pub mod resolve;
pub mod walk;

pub use errors::{MatchError, MatchResult};
pub use resolve::{ResolveOptions, resolve_patterns, resolve_patterns_with};
pub use walk::{DirectoryWalk, FsWalk};
