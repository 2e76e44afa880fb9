//! Scolo server entry point

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use scolo_server::routes;
use scolo_server::AppState;

/// Bind address when `SCOLO_BIND` is unset
const DEFAULT_BIND: &str = "127.0.0.1:8000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = AppState::from_env();
    let app = routes::router(state);

    let bind = std::env::var("SCOLO_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))?;

    tracing::info!("listening on {}", bind);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
