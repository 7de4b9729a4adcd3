//! Staging area
//!
//! A plain directory tree at `.wit/staging_area/` mirroring the files selected
//! for the next commit. `add` copies into it, checkout and merge replace its
//! contents wholesale, and commit copies it verbatim into a new snapshot.

use crate::artifacts::core::{copy_contents, copy_to, reset_directory};
use derive_new::new;
use std::path::Path;
use tracing::debug;

#[derive(Debug, new)]
pub struct StagingArea {
    path: Box<Path>,
}

impl StagingArea {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stage `source` at `relative_path` inside the staging area
    pub fn stage(&self, source: &Path, relative_path: &Path) -> anyhow::Result<()> {
        debug!(?relative_path, "staging entry");

        copy_to(source, &self.path.join(relative_path))
    }

    /// Stage every top-level entry of `tree`, skipping `ignored` names
    pub fn stage_all(&self, tree: &Path, ignored: &[&str]) -> anyhow::Result<()> {
        copy_contents(tree, &self.path, ignored)
    }

    /// Replace the whole staging area with the contents of `tree`
    pub fn replace_with(&self, tree: &Path) -> anyhow::Result<()> {
        reset_directory(&self.path)?;
        copy_contents(tree, &self.path, &[])
    }
}
