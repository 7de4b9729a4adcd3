use crate::artifacts::core::{copy_contents, copy_to};
use crate::errors::WitError;
use anyhow::Context;
use std::path::{Component, Path, PathBuf};

/// Name of the repository control directory at the working-tree root
pub const REPOSITORY_DIR: &str = ".wit";

pub const IGNORED_PATHS: [&str; 1] = [REPOSITORY_DIR];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of `path` relative to the working-tree root
    ///
    /// `path` must exist, lie inside the working tree and outside `.wit`.
    /// The root itself maps to an empty path.
    pub fn relative_path(&self, path: &Path) -> anyhow::Result<PathBuf> {
        let absolute_path = path
            .canonicalize()
            .with_context(|| format!("the specified path does not exist: {:?}", path))?;

        let relative_path = absolute_path
            .strip_prefix(self.path.as_ref())
            .map_err(|_| WitError::PathOutsideRepository(absolute_path.clone()))?;

        if Self::is_ignored(relative_path) {
            return Err(WitError::PathOutsideRepository(absolute_path.clone()).into());
        }

        Ok(relative_path.to_path_buf())
    }

    /// Copy every entry of `tree` over the working tree
    ///
    /// Files that exist in the working tree but not in `tree` are left alone.
    pub fn overwrite_with(&self, tree: &Path) -> anyhow::Result<()> {
        copy_contents(tree, &self.path, &IGNORED_PATHS)
    }

    /// Copy the entry at `relative_path` inside `tree` to the same place in the working tree
    pub fn overwrite_entry(&self, tree: &Path, relative_path: &Path) -> anyhow::Result<()> {
        copy_to(&tree.join(relative_path), &self.path.join(relative_path))
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| {
            if let Component::Normal(name) = component {
                IGNORED_PATHS.contains(&name.to_string_lossy().as_ref())
            } else {
                false
            }
        })
    }
}
