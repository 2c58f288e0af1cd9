mod chat;
mod config;
mod error;
mod handlers;
mod llm;
mod routes;
mod state;
mod translate;
mod tts;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment may already be set
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("travel_buddy_backend=debug,tower_http=debug")),
        )
        .init();

    let config = Config::load()?;
    info!(
        "Loaded configuration: upstream={}, chat_model={}, translate_model={}, tts_model={}",
        config.upstream.base_url, config.chat.model, config.translate.model, config.tts.model
    );

    let host = config.system.host.clone();
    let port = config.system.port;

    let app_state = AppState::new(config)?;
    let app = routes::create_app(app_state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Starting server on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
