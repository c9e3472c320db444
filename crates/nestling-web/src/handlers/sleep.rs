//! Sleep tracker endpoints.

use axum::extract::{Json, Path, State};
use nestling_common::ApiError;
use nestling_db::{NewSleepLog, SleepLog, SleepRepository};

use crate::auth::CurrentUser;
use crate::handlers::owned_child;
use crate::state::SharedState;

/// GET /api/children/{id}/sleep
pub async fn list_sleeps(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(child_id): Path<String>,
) -> Result<Json<Vec<SleepLog>>, ApiError> {
    let child = owned_child(&state, &current.user, &child_id).await?;
    let logs = SleepRepository::new(&state.db)
        .list_by_child(&child.id)
        .await?;
    Ok(Json(logs))
}

/// POST /api/children/{id}/sleep
pub async fn create_sleep(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(child_id): Path<String>,
    Json(payload): Json<NewSleepLog>,
) -> Result<Json<SleepLog>, ApiError> {
    // The tracker form requires both start and end before submit.
    if payload.sleep_end.is_none() {
        return Err(ApiError::validation("sleep_end is required"));
    }
    if let Some(end) = payload.sleep_end {
        if end < payload.sleep_start {
            return Err(ApiError::validation("sleep_end must be after sleep_start"));
        }
    }

    let child = owned_child(&state, &current.user, &child_id).await?;
    let log = SleepRepository::new(&state.db)
        .insert(&child.id, payload)
        .await?;
    Ok(Json(log))
}

/// DELETE /api/sleep/{id}
pub async fn delete_sleep(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = SleepRepository::new(&state.db)
        .delete(&id, &current.user.id)
        .await?;
    if !deleted {
        return Err(ApiError::not_found(format!("sleep log {id}")));
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}
