use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::{MatchError, MatchResult};

/// Directory enumeration used during recursive-descent expansion.
///
/// The bundled [`FsWalk`] reads the real file system; embedders can
/// substitute their own provider.
pub trait DirectoryWalk {
    /// Every directory under `root`, the root itself included, pruning any
    /// directory whose name appears in `skip`.
    ///
    /// A nonexistent `root` enumerates to nothing; any other I/O failure is
    /// fatal to the enumeration.
    fn directories(&self, root: &Path, skip: &[String]) -> MatchResult<Vec<PathBuf>>;
}

/// File-system backed [`DirectoryWalk`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWalk;

impl DirectoryWalk for FsWalk {
    fn directories(&self, root: &Path, skip: &[String]) -> MatchResult<Vec<PathBuf>> {
        if !root.exists() {
            return Ok(Vec::new());
        }

        let mut directories = Vec::new();
        let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
            !entry
                .file_name()
                .to_str()
                .is_some_and(|name| skip.iter().any(|skipped| skipped == name))
        });

        for entry in walker {
            let entry = entry.map_err(|source| {
                let path = source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                let source = source
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("directory walk failed"));
                MatchError::CannotEnumerate { path, source }
            })?;
            if entry.file_type().is_dir() {
                directories.push(entry.into_path());
            }
        }

        Ok(directories)
    }
}
