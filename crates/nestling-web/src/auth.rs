//! Session auth: signup/login/logout handlers and the bearer-token
//! extractor guarding every other API route.

use axum::extract::{FromRequestParts, Json, State};
use axum::http::request::Parts;
use axum::RequestPartsExt;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use nestling_common::ApiError;
use nestling_db::{InsightRepository, NewUser, User, UserRepository};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::state::SharedState;

/// The authenticated user resolved from the request's bearer token.
pub struct CurrentUser {
    pub user: User,
    pub token: String,
}

impl FromRequestParts<SharedState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| ApiError::unauthorized("missing bearer token"))?;

        let token = bearer.token().to_string();
        let user = UserRepository::new(&state.db)
            .find_by_session(&token)
            .await?
            .ok_or_else(|| ApiError::unauthorized("invalid session"))?;

        Ok(Self { user, token })
    }
}

fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: User,
}

pub async fn signup(
    State(state): State<SharedState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(ApiError::validation("email and password are required"));
    }

    let users = UserRepository::new(&state.db);
    let user = users
        .create(NewUser {
            email: payload.email.trim().to_string(),
            full_name: payload.full_name,
            password_hash: hash_password(&payload.password),
        })
        .await?;
    let session = users.create_session(&user.id).await?;
    InsightRepository::new(&state.db).seed_for_user(&user.id).await?;

    tracing::info!(user_id = %user.id, "user signed up");
    Ok(Json(SessionResponse { token: session.token, user }))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let users = UserRepository::new(&state.db);
    let user = users
        .find_by_email(payload.email.trim())
        .await?
        .filter(|u| u.password_hash == hash_password(&payload.password))
        .ok_or_else(|| ApiError::unauthorized("invalid credentials"))?;

    let session = users.create_session(&user.id).await?;
    Ok(Json(SessionResponse { token: session.token, user }))
}

pub async fn current_user(current: CurrentUser) -> Json<User> {
    Json(current.user)
}

pub async fn logout(
    State(state): State<SharedState>,
    current: CurrentUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    UserRepository::new(&state.db)
        .delete_session(&current.token)
        .await?;
    Ok(Json(serde_json::json!({ "signed_out": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_digest_is_stable_hex() {
        let a = hash_password("hunter2");
        let b = hash_password("hunter2");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert_ne!(a, hash_password("hunter3"));
    }
}
