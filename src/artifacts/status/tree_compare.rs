//! Whole-file comparison of two directory trees
//!
//! Files are compared byte for byte; there is no line-level diff and no
//! content hashing. The status comparisons are shallow:
//! [`compare_folders`] only looks at top-level entries and [`compare_files`]
//! descends [`SUBDIRECTORY_DEPTH`] directory level below the top.
//! [`compare_trees`] walks the whole tree and backs merge. A missing tree
//! compares as an empty one.

use crate::artifacts::core::list_entry_names;
use anyhow::Context;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::{Path, PathBuf};

/// How many directory levels below the top `compare_files` descends
pub const SUBDIRECTORY_DEPTH: usize = 1;

const CHUNK_SIZE: usize = 8 * 1024;

/// Top-level entries of `new` that are absent from `old`
pub fn compare_folders(
    old: &Path,
    new: &Path,
    ignored: &[&str],
) -> anyhow::Result<BTreeSet<PathBuf>> {
    let old_entries = list_entry_names(old)?;

    Ok(list_entry_names(new)?
        .into_iter()
        .filter(|name| !old_entries.contains(name) && !ignored.contains(&name.as_str()))
        .map(PathBuf::from)
        .collect())
}

/// Files present in both trees whose contents differ
///
/// Paths are relative to the tree roots; a differing file one directory down
/// is reported as `dir/file`.
pub fn compare_files(old: &Path, new: &Path) -> anyhow::Result<BTreeSet<PathBuf>> {
    let mut changed = BTreeSet::new();
    collect_changed_files(old, new, Path::new(""), SUBDIRECTORY_DEPTH, &mut changed)?;

    Ok(changed)
}

fn collect_changed_files(
    old: &Path,
    new: &Path,
    prefix: &Path,
    depth_left: usize,
    changed: &mut BTreeSet<PathBuf>,
) -> anyhow::Result<()> {
    let old_entries = list_entry_names(old)?;
    let new_entries = list_entry_names(new)?;

    for name in old_entries.intersection(&new_entries) {
        let old_path = old.join(name);
        let new_path = new.join(name);

        if old_path.is_file() && new_path.is_file() {
            if contents_differ(&old_path, &new_path)? {
                changed.insert(prefix.join(name));
            }
        } else if old_path.is_dir() && new_path.is_dir() && depth_left > 0 {
            collect_changed_files(
                &old_path,
                &new_path,
                &prefix.join(name),
                depth_left - 1,
                changed,
            )?;
        }
    }

    Ok(())
}

/// Entries of `new` that are absent from `old` or differ from it, at any depth
///
/// A new directory is reported as a single entry rather than file by file,
/// and so is an entry whose kind changed between file and directory.
pub fn compare_trees(old: &Path, new: &Path) -> anyhow::Result<BTreeSet<PathBuf>> {
    let mut changed = BTreeSet::new();
    collect_changed_entries(old, new, Path::new(""), &mut changed)?;

    Ok(changed)
}

fn collect_changed_entries(
    old: &Path,
    new: &Path,
    prefix: &Path,
    changed: &mut BTreeSet<PathBuf>,
) -> anyhow::Result<()> {
    let old_entries = list_entry_names(old)?;

    for name in list_entry_names(new)? {
        let old_path = old.join(&name);
        let new_path = new.join(&name);
        let relative_path = prefix.join(&name);

        if !old_entries.contains(&name) {
            changed.insert(relative_path);
        } else if old_path.is_dir() && new_path.is_dir() {
            collect_changed_entries(&old_path, &new_path, &relative_path, changed)?;
        } else if old_path.is_file() && new_path.is_file() {
            if contents_differ(&old_path, &new_path)? {
                changed.insert(relative_path);
            }
        } else {
            changed.insert(relative_path);
        }
    }

    Ok(())
}

/// Byte-for-byte comparison, short-circuiting on size
pub fn contents_differ(old: &Path, new: &Path) -> anyhow::Result<bool> {
    let old_len = std::fs::metadata(old)
        .with_context(|| format!("failed to stat {:?}", old))?
        .len();
    let new_len = std::fs::metadata(new)
        .with_context(|| format!("failed to stat {:?}", new))?
        .len();

    if old_len != new_len {
        return Ok(true);
    }

    let mut old_file =
        std::fs::File::open(old).with_context(|| format!("failed to open {:?}", old))?;
    let mut new_file =
        std::fs::File::open(new).with_context(|| format!("failed to open {:?}", new))?;
    let mut old_buffer = [0u8; CHUNK_SIZE];
    let mut new_buffer = [0u8; CHUNK_SIZE];

    loop {
        let read = old_file.read(&mut old_buffer)?;
        if read == 0 {
            return Ok(false);
        }

        new_file.read_exact(&mut new_buffer[..read])?;
        if old_buffer[..read] != new_buffer[..read] {
            return Ok(true);
        }
    }
}
