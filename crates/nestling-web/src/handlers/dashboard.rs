//! Dashboard summary endpoint.

use axum::extract::{Json, State};
use nestling_common::ApiError;
use nestling_db::{Child, ChildRepository, DailyInsight, InsightRepository};
use serde::Serialize;

use crate::auth::CurrentUser;
use crate::state::SharedState;

#[derive(Serialize)]
pub struct DashboardResponse {
    pub children: Vec<Child>,
    pub insights: Vec<DailyInsight>,
}

/// GET /api/dashboard - the user's children plus recent daily insights
pub async fn dashboard(
    State(state): State<SharedState>,
    current: CurrentUser,
) -> Result<Json<DashboardResponse>, ApiError> {
    let children = ChildRepository::new(&state.db)
        .list_by_user(&current.user.id)
        .await?;
    let insights = InsightRepository::new(&state.db)
        .list_recent(&current.user.id)
        .await?;

    Ok(Json(DashboardResponse { children, insights }))
}
