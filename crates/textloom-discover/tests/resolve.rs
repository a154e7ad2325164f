use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use textloom_discover::{MatchError, ResolveOptions, resolve_patterns};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn fixture_root(tempdir: &TempDir) -> PathBuf {
    tempdir
        .path()
        .canonicalize()
        .expect("canonicalize fixture root")
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture directory");
    }
    fs::write(path, b"").expect("create fixture file");
}

fn resolve(root: &Path, patterns: &[&str]) -> BTreeSet<PathBuf> {
    resolve_in(root, patterns, Vec::new())
}

fn resolve_in(root: &Path, patterns: &[&str], excluded: Vec<String>) -> BTreeSet<PathBuf> {
    init_logging();
    let patterns: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
    let options = ResolveOptions {
        root: Some(root.to_path_buf()),
        excluded_directories: excluded,
    };
    resolve_patterns(&patterns, &options).expect("resolve")
}

#[test]
fn shallow_wildcard_matches_by_extension() {
    let tempdir = TempDir::new().expect("tempdir");
    let root = fixture_root(&tempdir);
    touch(&root.join("a.txt"));
    touch(&root.join("b.txt"));
    touch(&root.join("c.md"));

    let matched = resolve(&root, &["*.txt"]);
    let expected: BTreeSet<PathBuf> = [root.join("a.txt"), root.join("b.txt")].into();
    assert_eq!(matched, expected);
}

#[test]
fn exclude_pattern_subtracts_matches() {
    let tempdir = TempDir::new().expect("tempdir");
    let root = fixture_root(&tempdir);
    touch(&root.join("a.txt"));
    touch(&root.join("b.txt"));
    touch(&root.join("c.md"));

    let matched = resolve(&root, &["*.txt", "!b.txt"]);
    let expected: BTreeSet<PathBuf> = [root.join("a.txt")].into();
    assert_eq!(matched, expected);
}

#[test]
fn misplaced_exclude_marker_fails_before_any_io() {
    let patterns = vec!["x!y.txt".to_string()];
    let options = ResolveOptions {
        root: Some(PathBuf::from("/nonexistent/fixture/root")),
        excluded_directories: Vec::new(),
    };
    let result = resolve_patterns(&patterns, &options);
    assert!(matches!(
        result,
        Err(MatchError::InvalidExcludePattern(pattern)) if pattern == "x!y.txt"
    ));
}

#[test]
fn shallow_wildcard_stays_in_one_component() {
    let tempdir = TempDir::new().expect("tempdir");
    let root = fixture_root(&tempdir);
    touch(&root.join("top.txt"));
    touch(&root.join("sub/deep.txt"));

    let matched = resolve(&root, &["*.txt"]);
    let expected: BTreeSet<PathBuf> = [root.join("top.txt")].into();
    assert_eq!(matched, expected);
}

#[test]
fn question_mark_matches_exactly_one_character() {
    let tempdir = TempDir::new().expect("tempdir");
    let root = fixture_root(&tempdir);
    touch(&root.join("a1.txt"));
    touch(&root.join("a2.txt"));
    touch(&root.join("a10.txt"));

    let matched = resolve(&root, &["a?.txt"]);
    let expected: BTreeSet<PathBuf> = [root.join("a1.txt"), root.join("a2.txt")].into();
    assert_eq!(matched, expected);
}

#[test]
fn recursive_marker_descends_every_directory() {
    let tempdir = TempDir::new().expect("tempdir");
    let root = fixture_root(&tempdir);
    touch(&root.join("a.graphql"));
    touch(&root.join("sub/b.graphql"));
    touch(&root.join("sub/nested/c.graphql"));
    touch(&root.join("sub/nested/ignored.md"));

    let matched = resolve(&root, &["**/*.graphql"]);
    let expected: BTreeSet<PathBuf> = [
        root.join("a.graphql"),
        root.join("sub/b.graphql"),
        root.join("sub/nested/c.graphql"),
    ]
    .into();
    assert_eq!(matched, expected);
}

#[test]
fn recursive_marker_with_prefix_starts_below_root() {
    let tempdir = TempDir::new().expect("tempdir");
    let root = fixture_root(&tempdir);
    touch(&root.join("top.graphql"));
    touch(&root.join("src/a.graphql"));
    touch(&root.join("src/ops/b.graphql"));

    let matched = resolve(&root, &["src/**/*.graphql"]);
    let expected: BTreeSet<PathBuf> =
        [root.join("src/a.graphql"), root.join("src/ops/b.graphql")].into();
    assert_eq!(matched, expected);
}

#[test]
fn excluded_directories_are_pruned_from_descent() {
    let tempdir = TempDir::new().expect("tempdir");
    let root = fixture_root(&tempdir);
    touch(&root.join("src/a.graphql"));
    touch(&root.join("node_modules/dep/b.graphql"));
    touch(&root.join("src/node_modules/c.graphql"));

    let matched = resolve_in(
        &root,
        &["**/*.graphql"],
        vec!["node_modules".to_string()],
    );
    let expected: BTreeSet<PathBuf> = [root.join("src/a.graphql")].into();
    assert_eq!(matched, expected);
}

#[test]
fn exclude_patterns_expand_recursively_too() {
    let tempdir = TempDir::new().expect("tempdir");
    let root = fixture_root(&tempdir);
    touch(&root.join("ops/a.graphql"));
    touch(&root.join("ops/a.generated.graphql"));
    touch(&root.join("ops/deep/b.graphql"));
    touch(&root.join("ops/deep/b.generated.graphql"));

    let matched = resolve(&root, &["**/*.graphql", "!**/*.generated.graphql"]);
    let expected: BTreeSet<PathBuf> =
        [root.join("ops/a.graphql"), root.join("ops/deep/b.graphql")].into();
    assert_eq!(matched, expected);
}

#[test]
fn brace_alternation_matches_either_extension() {
    let tempdir = TempDir::new().expect("tempdir");
    let root = fixture_root(&tempdir);
    touch(&root.join("a.graphql"));
    touch(&root.join("b.gql"));
    touch(&root.join("c.txt"));

    let matched = resolve(&root, &["*.{graphql,gql}"]);
    let expected: BTreeSet<PathBuf> = [root.join("a.graphql"), root.join("b.gql")].into();
    assert_eq!(matched, expected);
}

#[test]
fn overlapping_patterns_deduplicate() {
    let tempdir = TempDir::new().expect("tempdir");
    let root = fixture_root(&tempdir);
    touch(&root.join("a.txt"));

    let matched = resolve(&root, &["*.txt", "a.*", "a.txt"]);
    let expected: BTreeSet<PathBuf> = [root.join("a.txt")].into();
    assert_eq!(matched, expected);
}

#[test]
fn no_match_is_an_empty_set_not_an_error() {
    let tempdir = TempDir::new().expect("tempdir");
    let root = fixture_root(&tempdir);
    touch(&root.join("a.md"));

    let matched = resolve(&root, &["*.txt", "!*.log"]);
    assert!(matched.is_empty());
}

#[cfg(unix)]
#[test]
fn include_matches_resolve_symlinks() {
    let tempdir = TempDir::new().expect("tempdir");
    let root = fixture_root(&tempdir);
    touch(&root.join("real.txt"));
    std::os::unix::fs::symlink(root.join("real.txt"), root.join("link.txt"))
        .expect("create symlink");

    let matched = resolve(&root, &["*.txt"]);
    let expected: BTreeSet<PathBuf> = [root.join("real.txt")].into();
    assert_eq!(matched, expected);
}

#[cfg(unix)]
#[test]
fn symlinked_path_is_excludable_by_its_unresolved_name() {
    let tempdir = TempDir::new().expect("tempdir");
    let root = fixture_root(&tempdir);
    touch(&root.join("real.txt"));
    std::os::unix::fs::symlink(root.join("real.txt"), root.join("link.txt"))
        .expect("create symlink");

    let matched = resolve(&root, &["link.txt", "!link.txt"]);
    assert!(matched.is_empty());
}
