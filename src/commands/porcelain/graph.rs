use crate::areas::repository::Repository;
use crate::artifacts::graph::history::HistoryGraph;
use std::io::Write;

impl Repository {
    /// Print one `child parent` edge per line
    pub fn graph(&self) -> anyhow::Result<()> {
        for edge in HistoryGraph::new(self).edges()? {
            writeln!(self.writer(), "{}", edge)?;
        }

        Ok(())
    }
}
