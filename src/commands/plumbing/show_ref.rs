use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    pub fn show_ref(&self) -> anyhow::Result<()> {
        for (name, commit_id) in self.refs().list_all_refs()? {
            writeln!(self.writer(), "{}={}", name, commit_id)?;
        }

        Ok(())
    }
}
