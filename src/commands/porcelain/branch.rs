use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use std::io::Write;

impl Repository {
    /// Create `branch_name` at HEAD, or list branches when no name is given
    pub fn branch(&mut self, branch_name: Option<&str>) -> anyhow::Result<()> {
        match branch_name {
            Some(branch_name) => self.create_branch(branch_name),
            None => self.list_branches(),
        }
    }

    fn create_branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(branch_name.to_string())?;

        let _lock = self.lock()?;
        self.refs().create_branch(&branch_name)?;

        Ok(())
    }

    fn list_branches(&self) -> anyhow::Result<()> {
        let active_branch = self.refs().read_active_branch()?;

        for (name, _) in self.refs().list_branches()? {
            let marker = if active_branch.as_deref() == Some(name.as_str()) {
                "*"
            } else {
                " "
            };
            writeln!(self.writer(), "{} {}", marker, name)?;
        }

        Ok(())
    }
}
