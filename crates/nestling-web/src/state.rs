//! Shared application state for the web server.

use nestling_common::Config;
use nestling_db::Database;
use nestling_llm::ChatBackend;
use std::sync::Arc;

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Config,
    pub llm: Arc<dyn ChatBackend>,
}

impl AppState {
    pub fn new(db: Database, config: Config, llm: Arc<dyn ChatBackend>) -> Self {
        Self { db, config, llm }
    }
}

pub type SharedState = Arc<AppState>;
