use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by pattern resolution.
///
/// An include pattern matching nothing is not an error; it contributes an
/// empty set.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The exclude marker appeared somewhere other than the first character.
    #[error("exclude marker must lead the pattern: '{0}'")]
    InvalidExcludePattern(String),
    /// Directory enumeration failed during recursive-descent expansion.
    #[error("cannot enumerate '{path}'")]
    CannotEnumerate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The glob engine rejected a pattern.
    #[error("invalid pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    /// Matching stopped because an entry could not be read.
    #[error("aborted while matching '{pattern}'")]
    Aborted {
        pattern: String,
        #[source]
        source: glob::GlobError,
    },
}

pub type MatchResult<T> = Result<T, MatchError>;
