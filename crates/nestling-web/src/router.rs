//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::auth::{signup, login, logout, current_user};
use crate::handlers::{
    children::{list_children, create_child, get_child, delete_child},
    feeding::{list_feedings, create_feeding, delete_feeding},
    sleep::{list_sleeps, create_sleep, delete_sleep},
    growth::{list_growth, create_growth, delete_growth},
    vaccines::{list_vaccines, create_vaccine, delete_vaccine},
    photos::{list_photos, create_photo, delete_photo},
    doctor_notes::{list_doctor_notes, create_doctor_note, delete_doctor_note},
    milestones::{catalog, list_milestones, create_milestone, delete_milestone},
    symptoms::{list_symptoms, assess_symptoms},
    community::{list_questions, ask_question},
    dashboard::dashboard,
    chat::{create_conversation, list_messages, send_message, chat_ai},
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Auth
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login",  post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me",     get(current_user))

        // Children
        .route("/api/children",      get(list_children).post(create_child))
        .route("/api/children/{id}", get(get_child).delete(delete_child))

        // Per-child health tracking
        .route("/api/children/{id}/feeding",  get(list_feedings).post(create_feeding))
        .route("/api/children/{id}/sleep",    get(list_sleeps).post(create_sleep))
        .route("/api/children/{id}/growth",   get(list_growth).post(create_growth))
        .route("/api/children/{id}/vaccines", get(list_vaccines).post(create_vaccine))
        .route("/api/children/{id}/photos",   get(list_photos).post(create_photo))
        .route("/api/children/{id}/doctor-notes", get(list_doctor_notes).post(create_doctor_note))
        .route("/api/feeding/{id}",      delete(delete_feeding))
        .route("/api/sleep/{id}",        delete(delete_sleep))
        .route("/api/growth/{id}",       delete(delete_growth))
        .route("/api/vaccines/{id}",     delete(delete_vaccine))
        .route("/api/photos/{id}",       delete(delete_photo))
        .route("/api/doctor-notes/{id}", delete(delete_doctor_note))

        // Milestones
        .route("/api/milestones/catalog", get(catalog))
        .route("/api/children/{id}/milestones", get(list_milestones).post(create_milestone))
        .route("/api/milestones/{id}", delete(delete_milestone))

        // Symptom checker
        .route("/api/symptoms",        get(list_symptoms))
        .route("/api/symptoms/assess", post(assess_symptoms))

        // Community
        .route("/api/community/questions", get(list_questions).post(ask_question))

        // Dashboard
        .route("/api/dashboard", get(dashboard))

        // Chat
        .route("/api/chat/conversations", post(create_conversation))
        .route(
            "/api/chat/conversations/{id}/messages",
            get(list_messages).post(send_message),
        )
        .route("/api/chat-ai", post(chat_ai))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
