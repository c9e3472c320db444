//! Milestone catalog and per-child achievement endpoints.

use axum::extract::{Json, Path, State};
use nestling_common::milestones::{find_entry, MilestoneCategory, MILESTONE_CATEGORIES};
use nestling_common::ApiError;
use nestling_db::{MilestoneRecord, MilestoneRepository, NewMilestoneRecord};

use crate::auth::CurrentUser;
use crate::handlers::owned_child;
use crate::state::SharedState;

/// GET /api/milestones/catalog - the static developmental catalog
pub async fn catalog() -> Json<&'static [MilestoneCategory]> {
    Json(&MILESTONE_CATEGORIES[..])
}

/// GET /api/children/{id}/milestones - achievements recorded for a child
pub async fn list_milestones(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(child_id): Path<String>,
) -> Result<Json<Vec<MilestoneRecord>>, ApiError> {
    let child = owned_child(&state, &current.user, &child_id).await?;
    let records = MilestoneRepository::new(&state.db)
        .list_by_child(&child.id)
        .await?;
    Ok(Json(records))
}

/// POST /api/children/{id}/milestones - mark a catalog milestone achieved
pub async fn create_milestone(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(child_id): Path<String>,
    Json(payload): Json<NewMilestoneRecord>,
) -> Result<Json<MilestoneRecord>, ApiError> {
    if find_entry(&payload.milestone_id).is_none() {
        return Err(ApiError::validation(format!(
            "unknown milestone id {}",
            payload.milestone_id
        )));
    }

    let child = owned_child(&state, &current.user, &child_id).await?;
    let record = MilestoneRepository::new(&state.db)
        .insert(&child.id, payload)
        .await?;
    Ok(Json(record))
}

/// DELETE /api/milestones/{id} - clear an achievement
pub async fn delete_milestone(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = MilestoneRepository::new(&state.db)
        .delete(&id, &current.user.id)
        .await?;
    if !deleted {
        return Err(ApiError::not_found(format!("milestone record {id}")));
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}
