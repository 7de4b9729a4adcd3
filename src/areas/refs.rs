//! Reference store (branches and HEAD)
//!
//! References are kept in one flat text file of `name=commit-id` lines:
//!
//! ```text
//! HEAD=3f0c...
//! feature=9ab1...
//! master=3f0c...
//! ```
//!
//! `HEAD` is the commit currently checked out; every other name is a branch.
//! The file is parsed into a keyed [`ReferenceSet`], updated by key and written
//! back whole, `HEAD` first and then branches in name order. Which branch
//! `HEAD` tracks lives in a separate active-branch marker file; an empty marker
//! means `HEAD` is detached from every branch.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::WitError;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::collections::BTreeMap;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use tracing::{debug, info, warn};

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Branch created together with the references file by the first commit
pub const DEFAULT_BRANCH: &str = "master";

const REFERENCES_FILE: &str = "references.txt";
const ACTIVE_BRANCH_FILE: &str = "activated.txt";

/// In-memory view of the references file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet {
    entries: BTreeMap<String, CommitId>,
}

impl ReferenceSet {
    /// Parse `name=value` lines
    ///
    /// Lines without `=` are ignored. The key is everything before the first
    /// `=`, the value everything after it with surrounding whitespace stripped.
    /// A later line for the same key replaces an earlier one.
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .filter_map(|line| line.split_once('='))
            .filter_map(|(name, value)| {
                let name = name.trim();
                match CommitId::try_parse(value.trim().to_string()) {
                    Ok(commit_id) if !name.is_empty() => Some((name.to_string(), commit_id)),
                    _ => {
                        warn!(reference = name, "skipping malformed reference line");
                        None
                    }
                }
            })
            .collect();

        ReferenceSet { entries }
    }

    pub fn serialize(&self) -> String {
        let head = self
            .entries
            .get_key_value(HEAD_REF_NAME)
            .into_iter()
            .chain(
                self.entries
                    .iter()
                    .filter(|(name, _)| name.as_str() != HEAD_REF_NAME),
            );

        head.map(|(name, commit_id)| format!("{}={}\n", name, commit_id))
            .collect()
    }

    pub fn head(&self) -> Option<&CommitId> {
        self.entries.get(HEAD_REF_NAME)
    }

    pub fn get(&self, name: &str) -> Option<&CommitId> {
        self.entries.get(name)
    }

    pub fn set(&mut self, name: &str, commit_id: CommitId) -> Option<CommitId> {
        self.entries.insert(name.to_string(), commit_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CommitId)> {
        self.entries.iter()
    }

    pub fn branches(&self) -> impl Iterator<Item = (&String, &CommitId)> {
        self.entries
            .iter()
            .filter(|(name, _)| name.as_str() != HEAD_REF_NAME)
    }

    pub fn into_map(self) -> BTreeMap<String, CommitId> {
        self.entries
    }
}

/// Reference store rooted at the `.wit` directory
#[derive(Debug, new)]
pub struct Refs {
    path: Box<Path>,
}

impl Refs {
    pub fn references_path(&self) -> Box<Path> {
        self.path.join(REFERENCES_FILE).into_boxed_path()
    }

    pub fn active_branch_path(&self) -> Box<Path> {
        self.path.join(ACTIVE_BRANCH_FILE).into_boxed_path()
    }

    /// Load the references file, or `None` before the first commit
    pub fn load(&self) -> anyhow::Result<Option<ReferenceSet>> {
        let path = self.references_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read references at {:?}", path))?;

        Ok(Some(ReferenceSet::parse(&content)))
    }

    pub fn read_head(&self) -> anyhow::Result<Option<CommitId>> {
        self.read_ref(HEAD_REF_NAME)
    }

    pub fn read_ref(&self, name: &str) -> anyhow::Result<Option<CommitId>> {
        Ok(self
            .load()?
            .and_then(|references| references.get(name).cloned()))
    }

    /// Every reference including `HEAD`
    pub fn list_all_refs(&self) -> anyhow::Result<BTreeMap<String, CommitId>> {
        Ok(self.load()?.map(ReferenceSet::into_map).unwrap_or_default())
    }

    pub fn list_branches(&self) -> anyhow::Result<Vec<(String, CommitId)>> {
        Ok(self
            .load()?
            .map(|references| {
                references
                    .branches()
                    .map(|(name, commit_id)| (name.clone(), commit_id.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Record a freshly written commit
    ///
    /// Without a references file, one is created binding both `HEAD` and
    /// `master` to the commit. Otherwise `HEAD` moves to the commit and so does
    /// `active_branch`, provided it pointed at the previous `HEAD`.
    ///
    /// # Returns
    ///
    /// The previous `HEAD`, or `None` for a root commit
    pub fn record_commit(
        &self,
        commit_id: &CommitId,
        active_branch: Option<&str>,
    ) -> anyhow::Result<Option<CommitId>> {
        let Some(mut references) = self.load()? else {
            let mut references = ReferenceSet::default();
            references.set(HEAD_REF_NAME, commit_id.clone());
            references.set(DEFAULT_BRANCH, commit_id.clone());
            self.write(&references)?;

            info!(commit = %commit_id, "created references file");
            return Ok(None);
        };

        let previous_head = references.set(HEAD_REF_NAME, commit_id.clone());

        match active_branch {
            Some(branch) if references.get(branch) == previous_head.as_ref() => {
                debug!(branch, commit = %commit_id, "advancing active branch");
                references.set(branch, commit_id.clone());
            }
            Some(branch) => {
                warn!(branch, "active branch does not point at HEAD; only HEAD moves");
            }
            None => debug!(commit = %commit_id, "detached HEAD; no branch advanced"),
        }

        self.write(&references)?;

        Ok(previous_head)
    }

    /// Point `HEAD` at `commit_id` without touching any branch
    pub fn update_head(&self, commit_id: &CommitId) -> anyhow::Result<Option<CommitId>> {
        let mut references = self.load()?.ok_or(WitError::NoHistory)?;
        let previous_head = references.set(HEAD_REF_NAME, commit_id.clone());

        self.write(&references)?;

        Ok(previous_head)
    }

    /// Bind `name` to the current `HEAD`
    ///
    /// Creating a branch that already exists rebinds it to `HEAD`.
    pub fn create_branch(&self, name: &BranchName) -> anyhow::Result<CommitId> {
        let mut references = self.load()?.ok_or(WitError::NoHistory)?;
        let head = references.head().cloned().ok_or(WitError::NoHistory)?;

        if let Some(previous) = references.set(name.as_ref(), head.clone()) {
            info!(branch = %name, previous = %previous, "rebinding existing branch");
        }

        self.write(&references)?;

        Ok(head)
    }

    pub fn read_active_branch(&self) -> anyhow::Result<Option<String>> {
        let path = self.active_branch_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read active branch at {:?}", path))?;
        let content = content.trim();

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(content.to_string()))
        }
    }

    /// Set the active-branch marker; `None` detaches `HEAD`
    pub fn set_active_branch(&self, branch: Option<&str>) -> anyhow::Result<()> {
        self.update_ref_file(self.active_branch_path(), branch.unwrap_or_default())
    }

    fn write(&self, references: &ReferenceSet) -> anyhow::Result<()> {
        self.update_ref_file(self.references_path(), &references.serialize())
    }

    fn update_ref_file(&self, path: Box<Path>, content: &str) -> anyhow::Result<()> {
        // open the file as WRONLY and CREAT, then hold an exclusive lock while writing
        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(content.as_bytes())?;

        Ok(())
    }
}
