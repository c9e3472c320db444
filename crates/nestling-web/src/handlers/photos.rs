//! Photo journal endpoints.

use axum::extract::{Json, Path, State};
use nestling_common::ApiError;
use nestling_db::{NewPhoto, Photo, PhotoRepository};

use crate::auth::CurrentUser;
use crate::handlers::owned_child;
use crate::state::SharedState;

/// GET /api/children/{id}/photos
pub async fn list_photos(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(child_id): Path<String>,
) -> Result<Json<Vec<Photo>>, ApiError> {
    let child = owned_child(&state, &current.user, &child_id).await?;
    let photos = PhotoRepository::new(&state.db)
        .list_by_child(&child.id)
        .await?;
    Ok(Json(photos))
}

/// POST /api/children/{id}/photos
pub async fn create_photo(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(child_id): Path<String>,
    Json(payload): Json<NewPhoto>,
) -> Result<Json<Photo>, ApiError> {
    if payload.photo_url.trim().is_empty() {
        return Err(ApiError::validation("photo_url is required"));
    }

    let child = owned_child(&state, &current.user, &child_id).await?;
    let photo = PhotoRepository::new(&state.db)
        .insert(&child.id, payload)
        .await?;
    Ok(Json(photo))
}

/// DELETE /api/photos/{id}
pub async fn delete_photo(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = PhotoRepository::new(&state.db)
        .delete(&id, &current.user.id)
        .await?;
    if !deleted {
        return Err(ApiError::not_found(format!("photo {id}")));
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}
