//! Snapshot store
//!
//! Every commit owns a directory `.wit/images/<id>/` holding a verbatim copy
//! of the staging area at commit time, plus a sibling `.wit/images/<id>.metadata`
//! file. Neither is modified after the commit is recorded. Nothing is hashed
//! or deduplicated: identical files in two snapshots are two separate copies.

use crate::artifacts::core::copy_contents;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::WitError;
use anyhow::Context;
use derive_new::new;
use fake::rand;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Attempts at drawing an unused commit id before giving up
pub const MAX_ID_ATTEMPTS: usize = 16;

const METADATA_EXTENSION: &str = "metadata";

#[derive(Debug, new)]
pub struct SnapshotStore {
    path: Box<Path>,
}

impl SnapshotStore {
    pub fn images_path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot_path(&self, commit_id: &CommitId) -> PathBuf {
        self.path.join(commit_id.as_ref())
    }

    pub fn metadata_path(&self, commit_id: &CommitId) -> PathBuf {
        self.path
            .join(format!("{}.{}", commit_id.as_ref(), METADATA_EXTENSION))
    }

    pub fn exists(&self, commit_id: &CommitId) -> bool {
        self.snapshot_path(commit_id).is_dir()
    }

    /// Allocate a fresh, empty snapshot directory under a random id
    pub fn create_snapshot(&self) -> anyhow::Result<CommitId> {
        self.create_snapshot_with(CommitId::generate)
    }

    /// Allocate a snapshot directory, drawing ids from `next_id`
    ///
    /// An id whose directory already exists is redrawn, at most
    /// [`MAX_ID_ATTEMPTS`] times.
    pub fn create_snapshot_with(
        &self,
        mut next_id: impl FnMut() -> CommitId,
    ) -> anyhow::Result<CommitId> {
        std::fs::create_dir_all(&self.path)
            .with_context(|| format!("failed to create snapshot store at {:?}", self.path))?;

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let commit_id = next_id();

            match std::fs::create_dir(self.snapshot_path(&commit_id)) {
                Ok(()) => {
                    debug!(commit = %commit_id, attempt, "allocated snapshot directory");
                    return Ok(commit_id);
                }
                Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                    warn!(commit = %commit_id, attempt, "commit id collision, redrawing");
                }
                Err(err) => {
                    return Err(err).with_context(|| {
                        format!("failed to create snapshot directory for {}", commit_id)
                    });
                }
            }
        }

        Err(WitError::ExhaustedIdSpace(MAX_ID_ATTEMPTS).into())
    }

    /// Copy every entry of `source_tree` into the snapshot of `commit_id`
    pub fn write_snapshot_content(
        &self,
        commit_id: &CommitId,
        source_tree: &Path,
    ) -> anyhow::Result<()> {
        copy_contents(source_tree, &self.snapshot_path(commit_id), &[])
            .with_context(|| format!("failed to write snapshot {}", commit_id))
    }

    pub fn write_metadata(&self, commit_id: &CommitId, commit: &Commit) -> anyhow::Result<()> {
        let metadata_path = self.metadata_path(commit_id);
        let temp_path = self.path.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .with_context(|| format!("unable to open metadata file {}", temp_path.display()))?;
        file.write_all(commit.serialize().as_bytes())
            .with_context(|| format!("unable to write metadata file {}", temp_path.display()))?;

        // rename the temp file to the metadata file to make it atomic
        std::fs::rename(&temp_path, &metadata_path).with_context(|| {
            format!("unable to rename metadata file to {}", metadata_path.display())
        })?;

        Ok(())
    }

    pub fn read_commit(&self, commit_id: &CommitId) -> anyhow::Result<Commit> {
        let metadata_path = self.metadata_path(commit_id);

        if !metadata_path.exists() {
            return Err(WitError::InvalidCommitId(commit_id.to_string()).into());
        }

        let content = std::fs::read_to_string(&metadata_path)
            .with_context(|| format!("unable to read metadata file {}", metadata_path.display()))?;

        Commit::deserialize(&content, &metadata_path)
    }

    pub fn read_metadata(&self, commit_id: &CommitId) -> anyhow::Result<String> {
        let metadata_path = self.metadata_path(commit_id);

        std::fs::read_to_string(&metadata_path)
            .map_err(|_| WitError::InvalidCommitId(commit_id.to_string()).into())
    }

    /// Remove a snapshot whose commit was never recorded
    pub fn discard(&self, commit_id: &CommitId) -> anyhow::Result<()> {
        let snapshot_path = self.snapshot_path(commit_id);
        if snapshot_path.exists() {
            std::fs::remove_dir_all(&snapshot_path)
                .with_context(|| format!("failed to discard snapshot {}", commit_id))?;
        }

        let metadata_path = self.metadata_path(commit_id);
        if metadata_path.exists() {
            std::fs::remove_file(&metadata_path)
                .with_context(|| format!("failed to discard metadata of {}", commit_id))?;
        }

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-meta-{}", rand::random::<u32>())
    }
}

/// Memoizes parent lists while walking history
#[derive(Debug, Default)]
pub struct CommitCache {
    parents: RefCell<HashMap<CommitId, Vec<CommitId>>>,
}

impl CommitCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load_parents(
        &self,
        snapshots: &SnapshotStore,
        commit_id: &CommitId,
    ) -> anyhow::Result<Vec<CommitId>> {
        if let Some(parents) = self.parents.borrow().get(commit_id) {
            return Ok(parents.clone());
        }

        let parents = snapshots.read_commit(commit_id)?.parents().to_vec();
        self.parents
            .borrow_mut()
            .insert(commit_id.clone(), parents.clone());

        Ok(parents)
    }
}
