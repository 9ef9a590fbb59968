mod config;
mod content;
mod errors;
mod llm_client;
mod navigation;
mod preferences;
mod quiz;
mod recommendation;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::content::{default_mentors, QuestionBank};
use crate::llm_client::{GeminiClient, GenerationService};
use crate::preferences::{load_theme, FileStore, KeyValueStore, MemoryStore, RedisStore};
use crate::routes::build_router;
use crate::session::Session;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails only on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize preference store (Redis when configured, JSON file otherwise)
    let store = build_store(&config).await?;
    let theme = load_theme(store.as_ref()).await;
    info!("Display preference restored: {theme}");

    // Initialize generation client; a missing credential disables recommendations
    let generator: Option<Arc<dyn GenerationService>> = match &config.google_api_key {
        Some(key) => {
            let client: Arc<dyn GenerationService> = Arc::new(GeminiClient::new(key.clone()));
            info!("Generation client initialized (model: {})", llm_client::MODEL);
            Some(client)
        }
        None => {
            warn!("GOOGLE_API_KEY is not set; career recommendations are disabled");
            None
        }
    };

    let bank = QuestionBank::default_bank();
    info!("Question bank loaded: {} questions", bank.len());

    let session = Session::new(bank, default_mentors(), config.recommendations_enabled(), theme);
    let state = AppState::new(session, generator, store);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the front end has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_store(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    if let Some(url) = &config.redis_url {
        let store = RedisStore::open(url)?;
        info!("Preference store: Redis");
        return Ok(Arc::new(store));
    }
    let store = FileStore::new(config.preferences_path.clone());
    if let Some(dir) = store.path().parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = tokio::fs::create_dir_all(dir).await {
            warn!(
                "Cannot create {} ({e}); theme changes will not outlive this process",
                dir.display()
            );
            return Ok(Arc::new(MemoryStore::new()));
        }
    }
    info!("Preference store: file at {}", store.path().display());
    Ok(Arc::new(store))
}
