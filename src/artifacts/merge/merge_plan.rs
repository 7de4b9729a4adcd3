use crate::areas::snapshots::SnapshotStore;
use crate::areas::staging::StagingArea;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::status::tree_compare::compare_trees;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Entries one side added or changed relative to the common ancestor, at any depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideChanges {
    pub commit_id: CommitId,
    pub snapshot: PathBuf,
    pub changed: BTreeSet<PathBuf>,
}

impl SideChanges {
    fn compute(
        snapshots: &SnapshotStore,
        baseline: &Path,
        commit_id: &CommitId,
    ) -> anyhow::Result<Self> {
        let snapshot = snapshots.snapshot_path(commit_id);
        let changed = compare_trees(baseline, &snapshot)?;

        Ok(SideChanges {
            commit_id: commit_id.clone(),
            snapshot,
            changed,
        })
    }

    fn apply(&self, staging: &StagingArea) -> anyhow::Result<()> {
        for path in &self.changed {
            staging.stage(&self.snapshot.join(path), path)?;
        }

        Ok(())
    }
}

/// Two-way reconciliation of `branch` and `head` on top of their common ancestor
///
/// Both change sets are computed before the staging area is touched, so the
/// branch pass cannot hide head-side changes from the head pass.
#[derive(Debug, Clone)]
pub struct MergePlan {
    common_ancestor: CommitId,
    baseline: PathBuf,
    branch: SideChanges,
    head: SideChanges,
}

impl MergePlan {
    pub fn new(
        snapshots: &SnapshotStore,
        common_ancestor: &CommitId,
        branch: &CommitId,
        head: &CommitId,
    ) -> anyhow::Result<Self> {
        let baseline = snapshots.snapshot_path(common_ancestor);
        let branch = SideChanges::compute(snapshots, &baseline, branch)?;
        let head = SideChanges::compute(snapshots, &baseline, head)?;

        debug!(
            ancestor = %common_ancestor,
            branch_changes = branch.changed.len(),
            head_changes = head.changed.len(),
            "merge plan computed"
        );

        Ok(MergePlan {
            common_ancestor: common_ancestor.clone(),
            baseline,
            branch,
            head,
        })
    }

    pub fn common_ancestor(&self) -> &CommitId {
        &self.common_ancestor
    }

    pub fn branch_changes(&self) -> &BTreeSet<PathBuf> {
        &self.branch.changed
    }

    pub fn head_changes(&self) -> &BTreeSet<PathBuf> {
        &self.head.changed
    }

    /// Every path the merge rewrites, from either side
    pub fn merged_paths(&self) -> BTreeSet<PathBuf> {
        self.branch
            .changed
            .union(&self.head.changed)
            .cloned()
            .collect()
    }

    /// Paths changed on both sides; HEAD's version wins for these
    pub fn overlaps(&self) -> BTreeSet<PathBuf> {
        self.branch
            .changed
            .intersection(&self.head.changed)
            .cloned()
            .collect()
    }

    /// Reset `staging` to the ancestor, then lay the branch and head changes over it
    pub fn apply(&self, staging: &StagingArea) -> anyhow::Result<()> {
        staging.replace_with(&self.baseline)?;

        debug!(branch = %self.branch.commit_id, "applying branch changes");
        self.branch.apply(staging)?;
        debug!(head = %self.head.commit_id, "applying head changes");
        self.head.apply(staging)?;

        for path in self.overlaps() {
            info!(?path, "changed on both sides, keeping HEAD's version");
        }

        Ok(())
    }
}
