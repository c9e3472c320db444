//! Child registration and lookup.

use axum::extract::{Json, Path, State};
use nestling_common::ApiError;
use nestling_db::{Child, ChildRepository, NewChild};

use crate::auth::CurrentUser;
use crate::handlers::owned_child;
use crate::state::SharedState;

/// GET /api/children - children owned by the session user
pub async fn list_children(
    State(state): State<SharedState>,
    current: CurrentUser,
) -> Result<Json<Vec<Child>>, ApiError> {
    let children = ChildRepository::new(&state.db)
        .list_by_user(&current.user.id)
        .await?;
    Ok(Json(children))
}

/// POST /api/children - register a child
pub async fn create_child(
    State(state): State<SharedState>,
    current: CurrentUser,
    Json(payload): Json<NewChild>,
) -> Result<Json<Child>, ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::validation("name is required"));
    }

    let child = ChildRepository::new(&state.db)
        .insert(&current.user.id, payload)
        .await?;
    tracing::info!(child_id = %child.id, "child registered");
    Ok(Json(child))
}

/// GET /api/children/{id}
pub async fn get_child(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(child_id): Path<String>,
) -> Result<Json<Child>, ApiError> {
    let child = owned_child(&state, &current.user, &child_id).await?;
    Ok(Json(child))
}

/// DELETE /api/children/{id}
pub async fn delete_child(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(child_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let child = owned_child(&state, &current.user, &child_id).await?;
    ChildRepository::new(&state.db).delete(&child.id).await?;
    Ok(Json(serde_json::json!({ "deleted": true })))
}
