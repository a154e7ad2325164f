use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use glob::MatchOptions;
use tracing::{debug, info};

use crate::errors::{MatchError, MatchResult};
use crate::expand::{expand_braces, expand_recursive, expand_tilde};
use crate::walk::{DirectoryWalk, FsWalk};

/// Marker turning a pattern into an exclusion when it leads the string.
pub const EXCLUDE_MARKER: char = '!';

/// Options for one resolution call.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Directory relative patterns are evaluated against; defaults to the
    /// process working directory.
    pub root: Option<PathBuf>,
    /// Directory names pruned during recursive-descent expansion.
    pub excluded_directories: Vec<String>,
}

/// Resolve include/exclude patterns into a deduplicated set of absolute
/// paths.
///
/// Include matches are symlink-resolved; exclude matches are compared by
/// their literal expanded form as well, so a symlinked path can be excluded
/// by its un-resolved name. Patterns that match nothing contribute nothing.
pub fn resolve_patterns(
    patterns: &[String],
    options: &ResolveOptions,
) -> MatchResult<BTreeSet<PathBuf>> {
    resolve_patterns_with(&FsWalk, patterns, options)
}

/// As [`resolve_patterns`], with a caller-supplied directory enumerator.
pub fn resolve_patterns_with(
    walk: &dyn DirectoryWalk,
    patterns: &[String],
    options: &ResolveOptions,
) -> MatchResult<BTreeSet<PathBuf>> {
    validate(patterns)?;

    let root = match &options.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().map_err(|source| MatchError::CannotEnumerate {
            path: PathBuf::from("."),
            source,
        })?,
    };

    let mut includes = Vec::new();
    let mut excludes = Vec::new();
    for pattern in patterns {
        let (is_exclude, body) = split_marker(pattern);
        for alternative in expand_braces(body) {
            let alternative = expand_tilde(&alternative);
            for concrete in
                expand_recursive(&alternative, &root, &options.excluded_directories, walk)?
            {
                let anchored = anchor(&concrete, &root);
                if is_exclude {
                    excludes.push(anchored);
                } else {
                    includes.push(anchored);
                }
            }
        }
    }
    debug!(
        includes = includes.len(),
        excludes = excludes.len(),
        "patterns expanded"
    );

    let mut exclude_matches = BTreeSet::new();
    for pattern in &excludes {
        exclude_matches.extend(evaluate(pattern)?);
    }

    let mut resolved = BTreeSet::new();
    for pattern in &includes {
        for path in evaluate(pattern)? {
            if exclude_matches.contains(&path) {
                continue;
            }
            let canonical = std::fs::canonicalize(&path).unwrap_or(path);
            if exclude_matches.contains(&canonical) {
                continue;
            }
            resolved.insert(canonical);
        }
    }

    info!(
        patterns = patterns.len(),
        matched = resolved.len(),
        "document set resolved"
    );
    Ok(resolved)
}

/// Reject patterns carrying the exclude marker anywhere but up front,
/// before any file-system work happens.
fn validate(patterns: &[String]) -> MatchResult<()> {
    for pattern in patterns {
        let misplaced = pattern
            .char_indices()
            .any(|(idx, ch)| ch == EXCLUDE_MARKER && idx > 0);
        if misplaced {
            return Err(MatchError::InvalidExcludePattern(pattern.clone()));
        }
    }
    Ok(())
}

fn split_marker(pattern: &str) -> (bool, &str) {
    match pattern.strip_prefix(EXCLUDE_MARKER) {
        Some(body) => (true, body),
        None => (false, pattern),
    }
}

fn anchor(pattern: &str, root: &Path) -> String {
    if Path::new(pattern).is_absolute() {
        pattern.to_string()
    } else {
        format!("{}/{pattern}", root.display())
    }
}

/// Evaluate one shallow pattern against the file system.
///
/// `*` stays within a single path component. No match yields an empty list;
/// a malformed pattern and an unreadable entry are distinct errors.
fn evaluate(pattern: &str) -> MatchResult<Vec<PathBuf>> {
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };
    let entries =
        glob::glob_with(pattern, options).map_err(|source| MatchError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

    let mut matches = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => matches.push(path),
            Err(source) => {
                return Err(MatchError::Aborted {
                    pattern: pattern.to_string(),
                    source,
                });
            }
        }
    }
    debug!(pattern, matches = matches.len(), "pattern evaluated");
    Ok(matches)
}
