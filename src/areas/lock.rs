//! Repository-wide exclusive lock
//!
//! Mutating commands hold an advisory lock on `.wit/wit.lock` for their whole
//! duration, so two writers against the same repository run one after the
//! other instead of interleaving partial copies. Read-only commands do not
//! take it. The lock is released when the guard is dropped.

use anyhow::Context;
use file_guard::{FileGuard, Lock};
use std::fs::File;
use std::path::Path;
use tracing::debug;

const LOCK_FILE: &str = "wit.lock";

pub struct RepositoryLock {
    _guard: FileGuard<Box<File>>,
}

impl RepositoryLock {
    /// Block until the exclusive lock on `wit_dir` is held
    pub fn acquire(wit_dir: &Path) -> anyhow::Result<Self> {
        let lock_path = wit_dir.join(LOCK_FILE);
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("failed to open lock file at {:?}", lock_path))?;

        let guard = file_guard::lock(Box::new(file), Lock::Exclusive, 0, 1)
            .with_context(|| format!("failed to lock {:?}", lock_path))?;
        debug!(?lock_path, "acquired repository lock");

        Ok(RepositoryLock { _guard: guard })
    }
}
