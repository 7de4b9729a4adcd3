use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::checkout::state::CheckoutState;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::status::status_info::Status;
use crate::errors::WitError;
use tracing::debug;

const DETACHMENT_NOTICE: &str = r#"
You are in 'detached HEAD' state. Commits made from here advance HEAD only;
no branch follows them.

If you want to keep them, create a branch (now or later):

    wit branch <new-branch-name>
"#;

impl Repository {
    /// Switch the working tree, the staging area and HEAD to `target`
    ///
    /// Every check runs before the first write: an unknown target or a dirty
    /// state leaves the repository untouched.
    pub async fn checkout(&mut self, target: &str) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let revision = Revision::try_parse(target)?;
        let target_id = revision.resolve(self)?;

        if !self.snapshots().exists(&target_id) {
            return Err(WitError::InvalidCommitId(target_id.to_string()).into());
        }

        let staging = self.staging();
        let staging = staging.lock().await;

        let head = self.refs().read_head()?;
        let report = Status::new(self).collect(&staging, head.as_ref())?;
        let state = CheckoutState::from_status(report);
        if let Some(message) = state.refusal_message() {
            eprintln!("{}", message);
        }
        state.ensure_clean()?;

        let snapshot = self.snapshots().snapshot_path(&target_id);
        debug!(target = %target_id, "overwriting working tree and staging area");
        self.workspace().overwrite_with(&snapshot)?;
        staging.replace_with(&snapshot)?;

        self.refs().update_head(&target_id)?;
        if !revision.is_head() {
            self.refs().set_active_branch(revision.branch_label())?;
        }

        self.print_new_head(&revision, &target_id)?;

        Ok(())
    }

    fn print_new_head(&self, revision: &Revision, target_id: &CommitId) -> anyhow::Result<()> {
        match revision {
            Revision::Commit(_) => {
                let commit = self.snapshots().read_commit(target_id)?;
                eprintln!("Note: checking out '{}'.\n{}", target_id, DETACHMENT_NOTICE);
                eprintln!(
                    "HEAD is now at {} {}",
                    target_id.to_short_id(),
                    commit.short_message()
                );
            }
            Revision::Ref(_) if revision.is_head() => {
                eprintln!("Already on HEAD");
            }
            Revision::Ref(name) => {
                eprintln!("Switched to branch '{}'", name);
            }
        }

        Ok(())
    }
}
