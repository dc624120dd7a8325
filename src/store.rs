use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{File, Folder, User};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} with id {id} already exists")]
    DuplicateId { kind: &'static str, id: i64 },
    #[error("folder {0} does not exist")]
    UnknownFolder(i64),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// How much the store checks on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Integrity {
    /// Accept duplicate ids and dangling folder references.
    #[default]
    Permissive,
    /// Reject duplicate ids and files pointing at missing folders.
    Strict,
}

#[async_trait]
pub trait ProductionStore: Send + Sync + 'static {
    async fn find_user(&self, id: i64) -> Option<User>;

    async fn list_folders(&self) -> Vec<Folder>;

    async fn insert_folder(&self, folder: Folder) -> StoreResult<Folder>;

    async fn list_files(&self) -> Vec<File>;

    async fn list_files_in_folder(&self, folder_id: i64) -> Vec<File>;

    async fn insert_file(&self, file: File) -> StoreResult<File>;
}

/// Process-lifetime store. Each collection sits behind its own lock; all
/// reads and appends go through it.
pub struct InMemoryStore {
    users: Vec<User>,
    folders: RwLock<Vec<Folder>>,
    files: RwLock<Vec<File>>,
    integrity: Integrity,
}

impl InMemoryStore {
    pub fn new(users: Vec<User>, integrity: Integrity) -> Self {
        Self::with_data(users, Vec::new(), Vec::new(), integrity)
    }

    pub fn with_data(
        users: Vec<User>,
        folders: Vec<Folder>,
        files: Vec<File>,
        integrity: Integrity,
    ) -> Self {
        Self {
            users,
            folders: RwLock::new(folders),
            files: RwLock::new(files),
            integrity,
        }
    }

    pub fn integrity(&self) -> Integrity {
        self.integrity
    }
}

#[async_trait]
impl ProductionStore for InMemoryStore {
    async fn find_user(&self, id: i64) -> Option<User> {
        self.users.iter().find(|user| user.id == id).cloned()
    }

    async fn list_folders(&self) -> Vec<Folder> {
        self.folders.read().await.clone()
    }

    async fn insert_folder(&self, folder: Folder) -> StoreResult<Folder> {
        let mut guard = self.folders.write().await;
        if self.integrity == Integrity::Strict && guard.iter().any(|f| f.id == folder.id) {
            return Err(StoreError::DuplicateId {
                kind: "folder",
                id: folder.id,
            });
        }
        guard.push(folder.clone());
        Ok(folder)
    }

    async fn list_files(&self) -> Vec<File> {
        self.files.read().await.clone()
    }

    async fn list_files_in_folder(&self, folder_id: i64) -> Vec<File> {
        self.files
            .read()
            .await
            .iter()
            .filter(|file| file.folder_id == folder_id)
            .cloned()
            .collect()
    }

    async fn insert_file(&self, file: File) -> StoreResult<File> {
        if self.integrity == Integrity::Strict {
            // Take folders before files whenever both are held.
            let folders = self.folders.read().await;
            let mut files = self.files.write().await;
            if !folders.iter().any(|f| f.id == file.folder_id) {
                return Err(StoreError::UnknownFolder(file.folder_id));
            }
            if files.iter().any(|f| f.id == file.id) {
                return Err(StoreError::DuplicateId {
                    kind: "file",
                    id: file.id,
                });
            }
            files.push(file.clone());
            return Ok(file);
        }

        self.files.write().await.push(file.clone());
        Ok(file)
    }
}
