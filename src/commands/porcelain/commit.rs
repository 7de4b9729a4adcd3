use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    pub async fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let parent = self.refs().read_head()?;
        let message = message.trim().to_string();
        let (commit_id, commit) = self
            .write_commit(parent.into_iter().collect(), message)
            .await?;

        let is_root = if commit.is_root() {
            "(root-commit) "
        } else {
            ""
        };

        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit_id.to_short_id(),
            commit.short_message()
        )?;

        Ok(())
    }
}
