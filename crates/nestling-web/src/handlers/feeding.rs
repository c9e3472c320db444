//! Feeding tracker endpoints.

use axum::extract::{Json, Path, State};
use nestling_common::ApiError;
use nestling_db::{FeedingLog, FeedingRepository, NewFeedingLog};

use crate::auth::CurrentUser;
use crate::handlers::owned_child;
use crate::state::SharedState;

/// GET /api/children/{id}/feeding
pub async fn list_feedings(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(child_id): Path<String>,
) -> Result<Json<Vec<FeedingLog>>, ApiError> {
    let child = owned_child(&state, &current.user, &child_id).await?;
    let logs = FeedingRepository::new(&state.db)
        .list_by_child(&child.id)
        .await?;
    Ok(Json(logs))
}

/// POST /api/children/{id}/feeding
pub async fn create_feeding(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(child_id): Path<String>,
    Json(payload): Json<NewFeedingLog>,
) -> Result<Json<FeedingLog>, ApiError> {
    if payload.feeding_type.trim().is_empty() {
        return Err(ApiError::validation("feeding_type is required"));
    }

    let child = owned_child(&state, &current.user, &child_id).await?;
    let log = FeedingRepository::new(&state.db)
        .insert(&child.id, payload)
        .await?;
    Ok(Json(log))
}

/// DELETE /api/feeding/{id}
pub async fn delete_feeding(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = FeedingRepository::new(&state.db)
        .delete(&id, &current.user.id)
        .await?;
    if !deleted {
        return Err(ApiError::not_found(format!("feeding log {id}")));
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}
