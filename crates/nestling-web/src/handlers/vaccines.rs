//! Vaccine record endpoints.

use axum::extract::{Json, Path, State};
use nestling_common::ApiError;
use nestling_db::{NewVaccineRecord, VaccineRecord, VaccineRepository};

use crate::auth::CurrentUser;
use crate::handlers::owned_child;
use crate::state::SharedState;

/// GET /api/children/{id}/vaccines
pub async fn list_vaccines(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(child_id): Path<String>,
) -> Result<Json<Vec<VaccineRecord>>, ApiError> {
    let child = owned_child(&state, &current.user, &child_id).await?;
    let records = VaccineRepository::new(&state.db)
        .list_by_child(&child.id)
        .await?;
    Ok(Json(records))
}

/// POST /api/children/{id}/vaccines
pub async fn create_vaccine(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(child_id): Path<String>,
    Json(payload): Json<NewVaccineRecord>,
) -> Result<Json<VaccineRecord>, ApiError> {
    if payload.vaccine_name.trim().is_empty() {
        return Err(ApiError::validation("vaccine_name is required"));
    }

    let child = owned_child(&state, &current.user, &child_id).await?;
    let record = VaccineRepository::new(&state.db)
        .insert(&child.id, payload)
        .await?;
    Ok(Json(record))
}

/// DELETE /api/vaccines/{id}
pub async fn delete_vaccine(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = VaccineRepository::new(&state.db)
        .delete(&id, &current.user.id)
        .await?;
    if !deleted {
        return Err(ApiError::not_found(format!("vaccine record {id}")));
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}
