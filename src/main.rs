use std::net::SocketAddr;
use std::sync::Arc;

use legalens::llm::Llm;
use legalens::{config::Config, models::AppState, routes::create_router};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "legalens=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);

    if config.llm.google_api_key.is_empty() {
        // Requests are rejected with a configuration error until the key is set.
        warn!("GOOGLE_API_KEY is not set; analysis requests will fail");
    }

    // Create shared state and router. The Gemini client is built once so its
    // connection pool is reused across requests.
    let state = AppState {
        config: config.clone(),
        llm: Arc::new(Llm::google(&config.llm.google_api_key)),
    };
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
