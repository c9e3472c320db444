//! Community Q&A board endpoints.

use axum::extract::{Json, State};
use nestling_common::ApiError;
use nestling_db::{CommunityQuestion, CommunityRepository, NewQuestion};

use crate::auth::CurrentUser;
use crate::state::SharedState;

/// GET /api/community/questions - all questions, newest first
pub async fn list_questions(
    State(state): State<SharedState>,
    _current: CurrentUser,
) -> Result<Json<Vec<CommunityQuestion>>, ApiError> {
    let questions = CommunityRepository::new(&state.db).list().await?;
    Ok(Json(questions))
}

/// POST /api/community/questions - ask a question
pub async fn ask_question(
    State(state): State<SharedState>,
    current: CurrentUser,
    Json(payload): Json<NewQuestion>,
) -> Result<Json<CommunityQuestion>, ApiError> {
    if payload.title.trim().is_empty() || payload.content.trim().is_empty() {
        return Err(ApiError::validation("title and content are required"));
    }

    let question = CommunityRepository::new(&state.db)
        .insert(&current.user.full_name, payload)
        .await?;
    Ok(Json(question))
}
