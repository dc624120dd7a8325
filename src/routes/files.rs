use axum::extract::{Json, Path, State};

use crate::auth::CurrentUser;
use crate::error::AppResult;
use crate::models::File;
use crate::production;
use crate::state::AppState;

/// Files whose `folder_id` matches, in insertion order. A folder that does
/// not exist simply has no files.
pub async fn list_files(
    State(state): State<AppState>,
    Path(folder_id): Path<i64>,
    CurrentUser(_user): CurrentUser,
) -> Json<Vec<File>> {
    Json(production::list_files(state.store.as_ref(), folder_id).await)
}

pub async fn create_file(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<File>,
) -> AppResult<Json<File>> {
    let file = production::create_file(state.store.as_ref(), &user, payload).await?;
    Ok(Json(file))
}
