use crate::areas::refs::HEAD_REF_NAME;
use crate::areas::repository::Repository;
use crate::areas::snapshots::CommitCache;
use crate::artifacts::checkout::state::CheckoutState;
use crate::artifacts::merge::ancestor_finder::AncestorFinder;
use crate::artifacts::merge::merge_plan::MergePlan;
use crate::artifacts::status::status_info::Status;
use crate::errors::WitError;
use std::io::Write;
use tracing::info;

const MERGE_MESSAGE: &str = "Merging commit";

impl Repository {
    /// Merge `branch` into HEAD and record a two-parent commit
    ///
    /// Staging is rebuilt from the ancestor plus both sides' changes, and every
    /// changed path is copied back into the working tree so the two stay equal.
    pub async fn merge(&mut self, branch: &str) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let branch_id = self
            .refs()
            .read_ref(branch)?
            .ok_or_else(|| WitError::BranchNotFound(branch.to_string()))?;
        let head_id = self.refs().read_head()?.ok_or(WitError::NoHistory)?;

        let staging = self.staging();
        let staging = staging.lock().await;

        let report = Status::new(self).collect(&staging, Some(&head_id))?;
        CheckoutState::from_status(report).ensure_clean()?;

        let common_ancestor = {
            let commit_cache = CommitCache::new();
            let snapshots = self.snapshots();

            let finder = AncestorFinder::new(|commit_id| {
                commit_cache.get_or_load_parents(snapshots, commit_id)
            });

            finder
                .find_common_ancestor(&head_id, &branch_id)?
                .ok_or_else(|| {
                    WitError::NoCommonAncestor(branch.to_string(), HEAD_REF_NAME.to_string())
                })?
        };

        if common_ancestor == branch_id {
            writeln!(self.writer(), "Already up to date.")?;
            return Ok(());
        }

        info!(
            branch = %branch_id,
            head = %head_id,
            ancestor = %common_ancestor,
            "merging"
        );

        let plan = MergePlan::new(self.snapshots(), &common_ancestor, &branch_id, &head_id)?;
        plan.apply(&staging)?;
        for path in plan.merged_paths() {
            self.workspace().overwrite_entry(staging.path(), &path)?;
        }
        // write_commit takes the staging lock itself
        drop(staging);

        let (merge_id, _) = self
            .write_commit(vec![head_id, branch_id], MERGE_MESSAGE.to_string())
            .await?;

        let active_branch = self
            .refs()
            .read_active_branch()?
            .unwrap_or_else(|| HEAD_REF_NAME.to_string());
        writeln!(
            self.writer(),
            "Merged {} into {} as {}",
            branch,
            active_branch,
            merge_id.to_short_id()
        )?;

        Ok(())
    }
}
