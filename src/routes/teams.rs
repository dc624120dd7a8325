use axum::extract::{Json, Path, State};
use chrono::Utc;

use crate::production::{self, TeamView};
use crate::state::AppState;

// No credential check here; the team dashboards are open.
pub async fn view_team(State(state): State<AppState>, Path(team): Path<String>) -> Json<TeamView> {
    let now = Utc::now().naive_utc();
    Json(production::view_team(state.store.as_ref(), &team, now).await)
}
