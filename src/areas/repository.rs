use crate::areas::lock::RepositoryLock;
use crate::areas::refs::Refs;
use crate::areas::snapshots::SnapshotStore;
use crate::areas::staging::StagingArea;
use crate::areas::workspace::{REPOSITORY_DIR, Workspace};
use crate::errors::WitError;
use std::cell::{RefCell, RefMut};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

const IMAGES_DIR: &str = "images";
const STAGING_DIR: &str = "staging_area";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    staging: Arc<Mutex<StagingArea>>,
    snapshots: SnapshotStore,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Open the repository whose working-tree root is `path`
    ///
    /// The directory is created when missing; `.wit` itself is only created by `init`.
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path);

        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }

        let path = path.canonicalize()?;
        let wit_path = path.join(REPOSITORY_DIR);

        let staging = StagingArea::new(wit_path.join(STAGING_DIR).into_boxed_path());
        let snapshots = SnapshotStore::new(wit_path.join(IMAGES_DIR).into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(wit_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            staging: Arc::new(Mutex::new(staging)),
            snapshots,
            workspace,
            refs,
        })
    }

    /// Find the repository containing `start` by walking up its ancestors
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let start = start.canonicalize()?;

        let root = start
            .ancestors()
            .find(|dir| dir.join(REPOSITORY_DIR).is_dir())
            .ok_or_else(|| WitError::NotARepository(start.clone()))?;

        Self::new(&root.to_string_lossy(), writer)
    }

    pub fn wit_path(&self) -> Box<Path> {
        self.path.join(REPOSITORY_DIR).into_boxed_path()
    }

    pub fn is_initialized(&self) -> bool {
        self.wit_path().is_dir()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn staging(&self) -> Arc<Mutex<StagingArea>> {
        self.staging.clone()
    }

    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Take the exclusive repository lock for a mutating command
    pub fn lock(&self) -> anyhow::Result<RepositoryLock> {
        if !self.is_initialized() {
            return Err(WitError::NotARepository(self.path.to_path_buf()).into());
        }

        RepositoryLock::acquire(&self.wit_path())
    }
}
