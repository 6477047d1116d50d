mod configuration;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use frida::providers::llm::LlmProvider;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use configuration::Settings;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let settings = Settings::new()?;
    let addr = settings.server.socket_addr();

    let provider = LlmProvider::new(settings.provider.into_config())?;
    let state = AppState {
        provider: Arc::new(provider),
    };

    // The dashboard calls this endpoint from the browser
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::configure(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
