use crate::areas::database::Database;
use crate::areas::state::RepositoryState;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::status_info::Status;
use std::cell::{RefCell, RefMut};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Name of the directory holding everything gitlet persists
pub const GITLET_DIR: &str = ".gitlet";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    state: Arc<Mutex<RepositoryState>>,
    database: Database,
    workspace: Workspace,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path);

        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;
        let gitlet_path = path.join(GITLET_DIR);

        let state = RepositoryState::new(gitlet_path.join("repo").into_boxed_path());
        let database = Database::new(
            gitlet_path.join("objects").into_boxed_path(),
            gitlet_path.join("stage").into_boxed_path(),
        );
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            state: Arc::new(Mutex::new(state)),
            database,
            workspace,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn gitlet_path(&self) -> Box<Path> {
        self.path.join(GITLET_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn state(&self) -> Arc<Mutex<RepositoryState>> {
        self.state.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn working_status(&'_ self) -> Status<'_> {
        Status::new(self)
    }

    pub fn load_commit(&self, oid: &ObjectId) -> anyhow::Result<Commit> {
        self.database.parse_object_as_commit(oid)
    }

    pub fn load_blob(&self, oid: &ObjectId) -> anyhow::Result<Blob> {
        self.database.parse_object_as_blob(oid)
    }

    /// Commit at the tip of the current branch
    pub fn head_commit(&self, state: &RepositoryState) -> anyhow::Result<Commit> {
        self.load_commit(state.refs().head_oid()?)
    }
}
