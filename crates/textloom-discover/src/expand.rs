use std::path::Path;

use tracing::debug;

use crate::errors::MatchResult;
use crate::walk::DirectoryWalk;

/// Marker denoting "this directory and every descendant directory".
pub const RECURSIVE_MARKER: &str = "**";

/// Expand `{a,b}` alternations into concrete patterns.
///
/// Alternations nest; an unbalanced brace leaves the pattern untouched.
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };

    let mut depth = 0usize;
    let mut close = None;
    let mut alternatives = Vec::new();
    let mut start = open + 1;
    for (idx, byte) in pattern.bytes().enumerate().skip(open + 1) {
        match byte {
            b'{' => depth += 1,
            b'}' if depth > 0 => depth -= 1,
            b'}' => {
                close = Some(idx);
                break;
            }
            b',' if depth == 0 => {
                alternatives.push(&pattern[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    let Some(close) = close else {
        return vec![pattern.to_string()];
    };
    alternatives.push(&pattern[start..close]);

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    let mut expanded = Vec::new();
    for alternative in alternatives {
        expanded.extend(expand_braces(&format!("{prefix}{alternative}{suffix}")));
    }
    expanded
}

/// Expand a leading `~/` to the current user's home directory.
pub fn expand_tilde(pattern: &str) -> String {
    if let Some(rest) = pattern.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}/{rest}", home.display());
        }
    }
    pattern.to_string()
}

/// Expand a recursive-descent pattern into one shallow pattern per
/// directory reachable from the marker position.
///
/// The directory tree rooted at the prefix before the marker (the root
/// itself included) is enumerated, directories named in `excluded` are
/// pruned, and the suffix after the marker is appended to each surviving
/// directory. A pattern without the marker passes through unchanged.
pub fn expand_recursive(
    pattern: &str,
    root: &Path,
    excluded: &[String],
    walk: &dyn DirectoryWalk,
) -> MatchResult<Vec<String>> {
    let Some(marker) = pattern.find(RECURSIVE_MARKER) else {
        return Ok(vec![pattern.to_string()]);
    };

    let prefix = pattern[..marker].trim_end_matches('/');
    let suffix = pattern[marker + RECURSIVE_MARKER.len()..].trim_start_matches('/');

    let base = if prefix.is_empty() {
        root.to_path_buf()
    } else if Path::new(prefix).is_absolute() {
        Path::new(prefix).to_path_buf()
    } else {
        root.join(prefix)
    };

    let mut expanded = Vec::new();
    for directory in walk.directories(&base, excluded)? {
        if suffix.is_empty() {
            expanded.push(directory.display().to_string());
        } else {
            expanded.push(format!("{}/{suffix}", directory.display()));
        }
    }
    debug!(pattern, expanded = expanded.len(), "recursive marker expanded");
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_pattern_has_no_alternatives() {
        assert_eq!(expand_braces("src/*.txt"), vec!["src/*.txt"]);
    }

    #[test]
    fn alternation_expands_in_place() {
        assert_eq!(
            expand_braces("src/*.{graphql,gql}"),
            vec!["src/*.graphql", "src/*.gql"]
        );
    }

    #[test]
    fn nested_alternations_expand_depth_first() {
        assert_eq!(
            expand_braces("{a,b{1,2}}.txt"),
            vec!["a.txt", "b1.txt", "b2.txt"]
        );
    }

    #[test]
    fn unbalanced_brace_stays_literal() {
        assert_eq!(expand_braces("src/{oops.txt"), vec!["src/{oops.txt"]);
    }

    #[test]
    fn tilde_only_expands_at_the_front() {
        assert_eq!(expand_tilde("docs/~notes/*.md"), "docs/~notes/*.md");
    }
}
