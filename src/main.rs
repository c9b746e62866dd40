use anyhow::Context;

use flowbot::config::ServerConfig;
use flowbot::server::chat_routes;
use flowbot::state::SessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;

    eprintln!("💬 Flowbot v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Chat API: http://{}/chatbot", config.addr());
    eprintln!("   Health:   http://{}/health\n", config.addr());

    let sessions = SessionStore::new();
    let app = chat_routes(sessions);

    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("failed to bind {}", config.addr()))?;
    tracing::info!(addr = %config.addr(), "Chat server started");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
