use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::{Status, StatusReport};
use std::io::Write;

impl Repository {
    pub async fn status(&self) -> anyhow::Result<()> {
        let report = self.collect_status().await?;

        match &report.head {
            Some(head) => writeln!(self.writer(), "HEAD: {}", head)?,
            None => writeln!(self.writer(), "No commits yet")?,
        }

        match self.refs().read_active_branch()? {
            Some(branch) => writeln!(self.writer(), "On branch {}\n", branch)?,
            None => writeln!(self.writer(), "HEAD detached\n")?,
        }

        if report.is_clean() && report.untracked.is_empty() {
            writeln!(self.writer(), "nothing to commit, working tree clean")?;
        } else {
            write!(self.writer(), "{}", report)?;
        }

        Ok(())
    }

    /// Compare HEAD's snapshot, the staging area and the working tree
    ///
    /// Nothing is mutated, so two calls without an intervening change return
    /// equal reports.
    pub async fn collect_status(&self) -> anyhow::Result<StatusReport> {
        let head = self.refs().read_head()?;

        let staging = self.staging();
        let staging = staging.lock().await;

        Status::new(self).collect(&staging, head.as_ref())
    }
}
