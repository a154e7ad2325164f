use std::fs::{OpenOptions, create_dir_all};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{ConfigError, ConfigResult};

/// Outcome of writing one generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

/// Write rendered output to `path`, leaving the file untouched when the
/// on-disk content is already identical.
pub fn write_generated_file(path: &Path, text: &str) -> ConfigResult<WriteOutcome> {
    if let Ok(existing) = std::fs::read_to_string(path) {
        if existing == text {
            debug!(path = %path.display(), "generated file unchanged");
            return Ok(WriteOutcome::Unchanged);
        }
    }
    write_bytes_atomic(path, text.as_bytes())?;
    debug!(path = %path.display(), bytes = text.len(), "generated file written");
    Ok(WriteOutcome::Written)
}

/// Replace the file at `path` atomically: write a sibling temp file, fsync
/// it, rename it over the target, then sync the parent directory.
pub fn write_bytes_atomic(path: &Path, data: &[u8]) -> ConfigResult<()> {
    let parent = path.parent().filter(|parent| !parent.as_os_str().is_empty());
    if let Some(parent) = parent {
        create_dir_all(parent)?;
    }

    let tmp_path = temp_sibling(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    std::fs::rename(&tmp_path, path)?;
    if let Some(parent) = parent {
        sync_dir(parent)?;
    }

    Ok(())
}

fn temp_sibling(path: &Path) -> ConfigResult<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| ConfigError::Invalid(format!("not a writable path: '{}'", path.display())))?;
    Ok(path.with_file_name(format!("{}.tmp", file_name.to_string_lossy())))
}

fn sync_dir(path: &Path) -> io::Result<()> {
    let dir = OpenOptions::new().read(true).open(path)?;
    dir.sync_all()
}
