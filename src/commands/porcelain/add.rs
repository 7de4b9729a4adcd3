use crate::areas::repository::Repository;
use crate::areas::workspace::IGNORED_PATHS;
use std::path::Path;

impl Repository {
    /// Stage every path at its location relative to the working-tree root
    ///
    /// All paths are validated before anything is copied.
    pub async fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let relative_paths = paths
            .iter()
            .map(|path| self.workspace().relative_path(Path::new(path)))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let staging = self.staging();
        let staging = staging.lock().await;

        for relative_path in relative_paths {
            if relative_path.as_os_str().is_empty() {
                // the working-tree root itself
                staging.stage_all(self.workspace().path(), &IGNORED_PATHS)?;
            } else {
                staging.stage(
                    &self.workspace().path().join(&relative_path),
                    &relative_path,
                )?;
            }
        }

        Ok(())
    }
}
