use crate::areas::repository::Repository;
use crate::areas::staging::StagingArea;
use crate::areas::workspace::IGNORED_PATHS;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::status::file_change::{ChangeLabel, FileChangeType};
use crate::artifacts::status::tree_compare::{compare_files, compare_folders};
use derive_new::new;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub type ChangeSet = BTreeMap<PathBuf, FileChangeType>;

/// Result of comparing HEAD's snapshot, the staging area and the working tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    pub head: Option<CommitId>,
    /// Staging area vs. HEAD's snapshot
    pub changes_to_be_committed: ChangeSet,
    /// Working tree vs. staging area, for files present in both
    pub changes_not_staged: ChangeSet,
    /// Top-level working-tree entries absent from the staging area
    pub untracked: ChangeSet,
}

impl StatusReport {
    /// Clean means nothing to commit and nothing unstaged; untracked files do not count
    pub fn is_clean(&self) -> bool {
        self.changes_to_be_committed.is_empty() && self.changes_not_staged.is_empty()
    }
}

impl std::fmt::Display for StatusReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sections = [
            (
                "Changes to be committed:",
                &self.changes_to_be_committed,
                true,
            ),
            (
                "Changes not staged for commit:",
                &self.changes_not_staged,
                false,
            ),
            ("Untracked files:", &self.untracked, false),
        ];

        for (header, changes, staged) in sections {
            if changes.is_empty() {
                continue;
            }

            writeln!(f, "{}", header)?;
            for (path, change) in changes {
                let label = if staged {
                    ChangeLabel::staged(*change)
                } else {
                    ChangeLabel::unstaged(*change)
                };
                writeln!(f, "{}{}", label, path.display())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    /// Compare the three trees relative to `head`
    ///
    /// Without a `head` (no commit yet) the last snapshot is an empty tree.
    pub fn collect(
        &self,
        staging: &StagingArea,
        head: Option<&CommitId>,
    ) -> anyhow::Result<StatusReport> {
        let snapshots = self.repository.snapshots();
        let last_snapshot = match head {
            Some(head) => snapshots.snapshot_path(head),
            // a path that never exists stands for the empty tree
            None => snapshots.images_path().join("none"),
        };
        let working_tree = self.repository.workspace().path();

        let mut changes_to_be_committed = ChangeSet::new();
        for path in compare_folders(&last_snapshot, staging.path(), &[])? {
            changes_to_be_committed.insert(path, FileChangeType::Added);
        }
        for path in compare_files(&last_snapshot, staging.path())? {
            changes_to_be_committed.insert(path, FileChangeType::Modified);
        }

        let changes_not_staged = compare_files(staging.path(), working_tree)?
            .into_iter()
            .map(|path| (path, FileChangeType::Modified))
            .collect();

        let untracked = compare_folders(staging.path(), working_tree, &IGNORED_PATHS)?
            .into_iter()
            .map(|path| (path, FileChangeType::Untracked))
            .collect();

        Ok(StatusReport {
            head: head.cloned(),
            changes_to_be_committed,
            changes_not_staged,
            untracked,
        })
    }
}
