use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use std::io::Write;

impl Repository {
    pub fn cat_commit(&self, revision: &str) -> anyhow::Result<()> {
        let commit_id = Revision::try_parse(revision)?.resolve(self)?;
        let metadata = self.snapshots().read_metadata(&commit_id)?;

        write!(self.writer(), "{}", metadata)?;

        Ok(())
    }
}
