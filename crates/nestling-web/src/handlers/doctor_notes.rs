//! Pediatrician visit note endpoints.

use axum::extract::{Json, Path, State};
use nestling_common::ApiError;
use nestling_db::{DoctorNote, DoctorNoteRepository, NewDoctorNote};

use crate::auth::CurrentUser;
use crate::handlers::owned_child;
use crate::state::SharedState;

/// GET /api/children/{id}/doctor-notes
pub async fn list_doctor_notes(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(child_id): Path<String>,
) -> Result<Json<Vec<DoctorNote>>, ApiError> {
    let child = owned_child(&state, &current.user, &child_id).await?;
    let notes = DoctorNoteRepository::new(&state.db)
        .list_by_child(&child.id)
        .await?;
    Ok(Json(notes))
}

/// POST /api/children/{id}/doctor-notes
pub async fn create_doctor_note(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(child_id): Path<String>,
    Json(payload): Json<NewDoctorNote>,
) -> Result<Json<DoctorNote>, ApiError> {
    if payload.reason.trim().is_empty() {
        return Err(ApiError::validation("reason is required"));
    }

    let child = owned_child(&state, &current.user, &child_id).await?;
    let note = DoctorNoteRepository::new(&state.db)
        .insert(&child.id, payload)
        .await?;
    Ok(Json(note))
}

/// DELETE /api/doctor-notes/{id}
pub async fn delete_doctor_note(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = DoctorNoteRepository::new(&state.db)
        .delete(&id, &current.user.id)
        .await?;
    if !deleted {
        return Err(ApiError::not_found(format!("doctor note {id}")));
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}
