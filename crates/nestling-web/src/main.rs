//! Nestling Web Server
//!
//! Run with: cargo run -p nestling-web

use std::net::SocketAddr;
use std::sync::Arc;

use nestling_common::Config;
use nestling_db::Database;
use nestling_llm::OpenAiCompatibleBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;

    let db = Database::open(&config.database.url, config.database.max_connections).await?;
    db.initialize().await?;
    info!(url = %config.database.url, "database ready");

    let api_key = std::env::var(&config.llm.api_key_env).ok();
    if api_key.is_none() {
        tracing::warn!(
            env = %config.llm.api_key_env,
            "no API key set, chat will use fallback responses"
        );
    }
    let llm = Arc::new(OpenAiCompatibleBackend::new(
        config.llm.base_url.clone(),
        config.llm.model.clone(),
        api_key,
    ));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let state = nestling_web::state::AppState::new(db, config, llm);
    let app = nestling_web::router::build_router(state);

    info!("server listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
