use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::AdminStats;
use crate::services::StatsService;
use crate::state::AppState;

/// Dashboard counters
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Aggregate counters", body = AdminStats),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<AdminStats>> {
    let stats = StatsService::collect(&state.db, &state.uploads, state.started_at).await?;
    Ok(Json(stats))
}
