use axum::extract::{Json, State};

use crate::auth::CurrentUser;
use crate::error::AppResult;
use crate::models::Folder;
use crate::production;
use crate::state::AppState;

pub async fn list_folders(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> Json<Vec<Folder>> {
    Json(production::list_folders(state.store.as_ref()).await)
}

pub async fn create_folder(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<Folder>,
) -> AppResult<Json<Folder>> {
    let folder = production::create_folder(state.store.as_ref(), &user, payload).await?;
    Ok(Json(folder))
}
