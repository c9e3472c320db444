//! Growth tracker endpoints.

use axum::extract::{Json, Path, State};
use nestling_common::ApiError;
use nestling_db::{GrowthRecord, GrowthRepository, NewGrowthRecord};

use crate::auth::CurrentUser;
use crate::handlers::owned_child;
use crate::state::SharedState;

/// GET /api/children/{id}/growth
pub async fn list_growth(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(child_id): Path<String>,
) -> Result<Json<Vec<GrowthRecord>>, ApiError> {
    let child = owned_child(&state, &current.user, &child_id).await?;
    let records = GrowthRepository::new(&state.db)
        .list_by_child(&child.id)
        .await?;
    Ok(Json(records))
}

/// POST /api/children/{id}/growth
pub async fn create_growth(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(child_id): Path<String>,
    Json(payload): Json<NewGrowthRecord>,
) -> Result<Json<GrowthRecord>, ApiError> {
    if payload.height_cm.is_none()
        && payload.weight_kg.is_none()
        && payload.head_circumference_cm.is_none()
    {
        return Err(ApiError::validation("at least one measurement is required"));
    }

    let child = owned_child(&state, &current.user, &child_id).await?;
    let record = GrowthRepository::new(&state.db)
        .insert(&child.id, payload)
        .await?;
    Ok(Json(record))
}

/// DELETE /api/growth/{id}
pub async fn delete_growth(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = GrowthRepository::new(&state.db)
        .delete(&id, &current.user.id)
        .await?;
    if !deleted {
        return Err(ApiError::not_found(format!("growth record {id}")));
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}
