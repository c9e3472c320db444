//! Chat endpoints: conversation flow plus the upstream AI proxy.
//!
//! The proxy (`/api/chat-ai`) keeps the original wire contract: fixed
//! error strings, a `useFallback` hint on failure, and the message
//! order system prompt → prior turns → new message. The conversation
//! flow consumes the same logic in-process and degrades to a canned
//! reply instead of failing.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use nestling_common::ApiError;
use nestling_db::{ChatMessage, ChatRepository, Conversation, NewChatMessage};
use nestling_llm::{build_messages, fallback_reply, ChatRequest, LlmError, Message, EMPTY_REPLY};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::state::{AppState, SharedState};

/// POST /api/chat/conversations
pub async fn create_conversation(
    State(state): State<SharedState>,
    current: CurrentUser,
) -> Result<Json<Conversation>, ApiError> {
    let conversation = ChatRepository::new(&state.db)
        .create_conversation(&current.user.id, "New Conversation")
        .await?;
    Ok(Json(conversation))
}

async fn owned_conversation(
    state: &AppState,
    current: &CurrentUser,
    id: &str,
) -> Result<Conversation, ApiError> {
    ChatRepository::new(&state.db)
        .find_conversation(id)
        .await?
        .filter(|c| c.user_id == current.user.id)
        .ok_or_else(|| ApiError::not_found(format!("conversation {id}")))
}

/// GET /api/chat/conversations/{id}/messages
pub async fn list_messages(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(conversation_id): Path<String>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    let conversation = owned_conversation(&state, &current, &conversation_id).await?;
    let messages = ChatRepository::new(&state.db)
        .list_messages(&conversation.id)
        .await?;
    Ok(Json(messages))
}

#[derive(Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

#[derive(Serialize)]
pub struct SendMessageResponse {
    pub user_message: ChatMessage,
    pub assistant_message: ChatMessage,
}

/// POST /api/chat/conversations/{id}/messages
///
/// Stores the user turn, asks the assistant, stores its reply. Any
/// upstream failure is absorbed into a fallback reply; the request
/// itself only fails on persistence errors.
pub async fn send_message(
    State(state): State<SharedState>,
    current: CurrentUser,
    Path(conversation_id): Path<String>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, ApiError> {
    if payload.content.trim().is_empty() {
        return Err(ApiError::validation("content is required"));
    }

    let conversation = owned_conversation(&state, &current, &conversation_id).await?;
    let chat = ChatRepository::new(&state.db);

    // History is the transcript before this turn.
    let history: Vec<Message> = chat
        .list_messages(&conversation.id)
        .await?
        .into_iter()
        .map(|m| Message::new(m.role, m.content))
        .collect();

    let user_message = chat
        .insert_message(
            &conversation.id,
            NewChatMessage { role: "user".to_string(), content: payload.content.clone() },
        )
        .await?;

    let request = ChatRequest {
        messages: build_messages(&history, &payload.content),
        max_tokens: Some(state.config.llm.max_tokens),
        temperature: Some(state.config.llm.temperature),
    };

    let reply = match state.llm.complete(request).await {
        Ok(resp) if resp.content.is_empty() => EMPTY_REPLY.to_string(),
        Ok(resp) => resp.content,
        Err(err) => {
            tracing::warn!(error = %err, "assistant unavailable, using fallback reply");
            fallback_reply()
        }
    };

    let assistant_message = chat
        .insert_message(
            &conversation.id,
            NewChatMessage { role: "assistant".to_string(), content: reply },
        )
        .await?;

    Ok(Json(SendMessageResponse { user_message, assistant_message }))
}

// ── AI proxy ─────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ChatAiRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "conversationHistory")]
    pub conversation_history: Vec<Message>,
}

fn proxy_error(status: StatusCode, error: &str, use_fallback: bool) -> Response {
    let mut body = serde_json::json!({ "error": error });
    if use_fallback {
        body["useFallback"] = serde_json::Value::Bool(true);
    }
    (status, Json(body)).into_response()
}

/// POST /api/chat-ai - forward a message to the upstream completion API
pub async fn chat_ai(
    State(state): State<SharedState>,
    _current: CurrentUser,
    Json(payload): Json<ChatAiRequest>,
) -> Response {
    let message = match payload.message.as_deref() {
        Some(m) if !m.is_empty() => m,
        _ => return proxy_error(StatusCode::BAD_REQUEST, "Message is required", false),
    };

    if !state.llm.has_credentials() {
        return proxy_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "Groq API key not configured",
            true,
        );
    }

    let request = ChatRequest {
        messages: build_messages(&payload.conversation_history, message),
        max_tokens: Some(state.config.llm.max_tokens),
        temperature: Some(state.config.llm.temperature),
    };

    match state.llm.complete(request).await {
        Ok(resp) => {
            let content = if resp.content.is_empty() {
                EMPTY_REPLY.to_string()
            } else {
                resp.content
            };
            Json(serde_json::json!({ "response": content })).into_response()
        }
        Err(LlmError::MissingApiKey) => proxy_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "Groq API key not configured",
            true,
        ),
        Err(LlmError::ApiError { status, message }) => {
            tracing::error!(status, %message, "upstream API error");
            proxy_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to get AI response",
                true,
            )
        }
        Err(LlmError::Http(err)) => {
            tracing::error!(error = %err, "upstream request failed");
            proxy_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to get AI response",
                true,
            )
        }
        Err(err) => {
            tracing::error!(error = %err, "chat-ai proxy failed");
            proxy_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                true,
            )
        }
    }
}
