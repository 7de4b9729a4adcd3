use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use tracing::{info, warn};

impl Repository {
    /// Snapshot the staging area under a fresh id and record it
    ///
    /// References are only touched once the snapshot and its metadata are
    /// on disk; any failure before that removes the partial snapshot.
    pub async fn write_commit(
        &mut self,
        parents: Vec<CommitId>,
        message: String,
    ) -> anyhow::Result<(CommitId, Commit)> {
        let staging = self.staging();
        let staging = staging.lock().await;

        let commit = Commit::new(parents, Commit::timestamp_from_env(), message);
        let commit_id = self.snapshots().create_snapshot()?;

        let recorded = self
            .snapshots()
            .write_snapshot_content(&commit_id, staging.path())
            .and_then(|_| self.snapshots().write_metadata(&commit_id, &commit))
            .and_then(|_| {
                let active_branch = self.refs().read_active_branch()?;
                self.refs()
                    .record_commit(&commit_id, active_branch.as_deref())
            });

        if let Err(err) = recorded {
            warn!(commit = %commit_id, error = %err, "discarding partial snapshot");
            self.snapshots().discard(&commit_id)?;
            return Err(err);
        }

        info!(
            commit = %commit_id,
            merge = commit.is_merge(),
            "recorded commit"
        );

        Ok((commit_id, commit))
    }
}
