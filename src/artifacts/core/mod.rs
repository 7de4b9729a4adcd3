//! Tree copying shared by add, commit, checkout and merge
//!
//! A snapshot is a verbatim copy of a directory tree. Copies replace rather
//! than merge: copying a directory clears the destination directory first,
//! and copying a file over a directory removes the directory. Copying an
//! unmodified source twice leaves the destination unchanged.

use anyhow::Context;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// Copy `source` (file or directory) to exactly `destination`
///
/// Parent directories of `destination` are created when missing.
pub fn copy_to(source: &Path, destination: &Path) -> anyhow::Result<()> {
    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {:?}", parent))?;
    }

    match std::fs::copy(source, destination) {
        Ok(_) => Ok(()),
        // the entry is a directory itself, or a directory is in the way
        Err(_) if source.is_dir() => copy_directory(source, destination),
        Err(_) if source.is_file() && destination.is_dir() => {
            debug!(?destination, "replacing directory with file");
            std::fs::remove_dir_all(destination)
                .with_context(|| format!("failed to remove directory {:?}", destination))?;
            std::fs::copy(source, destination).with_context(|| {
                format!("failed to copy {:?} to {:?}", source, destination)
            })?;
            Ok(())
        }
        Err(err) => {
            Err(err).with_context(|| format!("failed to copy {:?} to {:?}", source, destination))
        }
    }
}

/// Copy every top-level entry of `source_dir` into `destination_dir`
pub fn copy_contents(
    source_dir: &Path,
    destination_dir: &Path,
    ignored: &[&str],
) -> anyhow::Result<()> {
    for name in list_entry_names(source_dir)? {
        if ignored.contains(&name.as_str()) {
            continue;
        }

        copy_to(&source_dir.join(&name), &destination_dir.join(&name))?;
    }

    Ok(())
}

/// Remove everything inside `dir`, leaving it empty (and creating it if missing)
pub fn reset_directory(dir: &Path) -> anyhow::Result<()> {
    if dir.is_dir() {
        std::fs::remove_dir_all(dir)
            .with_context(|| format!("failed to clear directory {:?}", dir))?;
    } else if dir.exists() {
        std::fs::remove_file(dir).with_context(|| format!("failed to remove file {:?}", dir))?;
    }

    std::fs::create_dir_all(dir).with_context(|| format!("failed to create directory {:?}", dir))
}

/// Names of the top-level entries of `dir`; a missing directory has none
pub fn list_entry_names(dir: &Path) -> anyhow::Result<BTreeSet<String>> {
    if !dir.is_dir() {
        return Ok(BTreeSet::new());
    }

    std::fs::read_dir(dir)
        .with_context(|| format!("failed to list directory {:?}", dir))?
        .map(|entry| {
            entry
                .map(|entry| entry.file_name().to_string_lossy().to_string())
                .with_context(|| format!("failed to read entry of {:?}", dir))
        })
        .collect()
}

fn copy_directory(source: &Path, destination: &Path) -> anyhow::Result<()> {
    debug!(?source, ?destination, "copying directory");

    reset_directory(destination)?;
    copy_contents(source, destination, &[])
}
