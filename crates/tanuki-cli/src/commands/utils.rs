//! Shared utilities for command implementations.

use crate::error::{BuildError, CliError, Result, ResultExt};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve a path relative to a working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Validate that an entry point file exists.
pub fn validate_entry(entry: &Path) -> Result<()> {
    if !entry.exists() {
        return Err(BuildError::EntryNotFound(entry.to_path_buf()).into());
    }

    if !entry.is_file() {
        return Err(CliError::InvalidArgument(format!(
            "Entry point is not a file: {}",
            entry.display()
        )));
    }

    Ok(())
}

/// Empties `out_dir`, creating it when missing.
///
/// Refuses paths that exist but are not directories.
pub fn clean_output_dir(out_dir: &Path) -> Result<()> {
    if out_dir.exists() {
        if !out_dir.is_dir() {
            return Err(CliError::InvalidArgument(format!(
                "Output path exists but is not a directory: {}",
                out_dir.display()
            )));
        }

        empty_dir(out_dir).context(format!("Failed to clean {}", out_dir.display()))?;
    } else {
        fs::create_dir_all(out_dir).context(format!("Failed to create {}", out_dir.display()))?;
    }

    Ok(())
}

fn empty_dir(dir: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to get current directory")
}

/// Sizes of the files that exist among `paths`.
pub fn artifact_sizes(paths: &[PathBuf]) -> Vec<(PathBuf, u64)> {
    paths
        .iter()
        .filter_map(|path| fs::metadata(path).ok().map(|meta| (path.clone(), meta.len())))
        .collect()
}
