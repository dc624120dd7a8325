//! Folder and file operations, independent of the HTTP layer.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    auth::{require_writer, AuthError},
    models::{File, Folder, User},
    store::{ProductionStore, StoreError},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductionError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderSummary {
    pub id: i64,
    pub name: String,
    pub state: String,
    pub hours_in_state: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSummary {
    pub id: i64,
    pub name: String,
    pub state: String,
    pub assigned_to: String,
    pub hours_in_state: f64,
}

/// Everything a team lead looks at: the team's folders and the files inside
/// them, with how long each has sat in its current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamView {
    pub team: String,
    pub folders: Vec<FolderSummary>,
    pub files: Vec<FileSummary>,
}

pub async fn list_folders(store: &dyn ProductionStore) -> Vec<Folder> {
    store.list_folders().await
}

pub async fn create_folder(
    store: &dyn ProductionStore,
    user: &User,
    folder: Folder,
) -> Result<Folder, ProductionError> {
    if let Err(err) = require_writer(user) {
        tracing::warn!(
            user_id = user.id,
            role = %user.role,
            folder_id = folder.id,
            "folder creation refused"
        );
        return Err(err.into());
    }

    let folder = store.insert_folder(folder).await?;
    tracing::info!(
        folder_id = folder.id,
        owner_team = %folder.owner_team,
        state = %folder.state,
        user_id = user.id,
        role = %user.role,
        "folder created"
    );
    Ok(folder)
}

pub async fn list_files(store: &dyn ProductionStore, folder_id: i64) -> Vec<File> {
    store.list_files_in_folder(folder_id).await
}

pub async fn create_file(
    store: &dyn ProductionStore,
    user: &User,
    file: File,
) -> Result<File, ProductionError> {
    if let Err(err) = require_writer(user) {
        tracing::warn!(
            user_id = user.id,
            role = %user.role,
            file_id = file.id,
            "file creation refused"
        );
        return Err(err.into());
    }

    let file = store.insert_file(file).await?;
    tracing::info!(
        file_id = file.id,
        folder_id = file.folder_id,
        state = %file.state,
        user_id = user.id,
        role = %user.role,
        "file created"
    );
    Ok(file)
}

/// Builds the [`TeamView`] for `team`. Unknown teams yield empty lists.
pub async fn view_team(store: &dyn ProductionStore, team: &str, now: NaiveDateTime) -> TeamView {
    let team_folders: Vec<Folder> = store
        .list_folders()
        .await
        .into_iter()
        .filter(|folder| folder.owner_team == team)
        .collect();
    let folder_ids: HashSet<i64> = team_folders.iter().map(|folder| folder.id).collect();

    let files = store
        .list_files()
        .await
        .into_iter()
        .filter(|file| folder_ids.contains(&file.folder_id))
        .map(|file| FileSummary {
            hours_in_state: hours_in_state(file.state_started_at, now),
            id: file.id,
            name: file.name,
            state: file.state,
            assigned_to: file.assigned_to,
        })
        .collect();

    let folders = team_folders
        .into_iter()
        .map(|folder| FolderSummary {
            hours_in_state: hours_in_state(folder.state_started_at, now),
            id: folder.id,
            name: folder.name,
            state: folder.state,
        })
        .collect();

    TeamView {
        team: team.to_string(),
        folders,
        files,
    }
}

/// Hours between `started` and `now`, rounded to two decimals. Negative when
/// `started` lies in the future.
pub fn hours_in_state(started: NaiveDateTime, now: NaiveDateTime) -> f64 {
    let millis = (now - started).num_milliseconds() as f64;
    (millis / 3_600_000.0 * 100.0).round() / 100.0
}
