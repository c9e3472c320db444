//! HTTP handlers for all API routes.

pub mod chat;
pub mod children;
pub mod community;
pub mod dashboard;
pub mod doctor_notes;
pub mod feeding;
pub mod growth;
pub mod milestones;
pub mod photos;
pub mod sleep;
pub mod symptoms;
pub mod vaccines;

use nestling_common::ApiError;
use nestling_db::{Child, ChildRepository, User};

use crate::state::AppState;

/// Fetch a child and verify it belongs to the requesting user.
/// A child owned by someone else is reported as not found.
pub(crate) async fn owned_child(
    state: &AppState,
    user: &User,
    child_id: &str,
) -> Result<Child, ApiError> {
    let child = ChildRepository::new(&state.db)
        .find_by_id(child_id)
        .await?
        .filter(|c| c.user_id == user.id)
        .ok_or_else(|| ApiError::not_found(format!("child {child_id}")))?;
    Ok(child)
}
