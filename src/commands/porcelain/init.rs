use crate::areas::refs::DEFAULT_BRANCH;
use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    pub async fn init(&mut self) -> anyhow::Result<()> {
        if self.is_initialized() {
            writeln!(
                self.writer(),
                "Reinitialized existing wit repository in {}",
                self.wit_path().display()
            )?;

            return Ok(());
        }

        fs::create_dir_all(self.snapshots().images_path())
            .context("Failed to create .wit/images directory")?;

        {
            let staging = self.staging();
            let staging = staging.lock().await;
            fs::create_dir_all(staging.path())
                .context("Failed to create .wit/staging_area directory")?;
        }

        self.refs()
            .set_active_branch(Some(DEFAULT_BRANCH))
            .context("Failed to write the active branch marker")?;

        writeln!(
            self.writer(),
            "Initialized empty wit repository in {}",
            self.wit_path().display()
        )?;

        Ok(())
    }
}
