use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::Config;
use crate::constants::{HEALTH_ROUTE, STATUS_CHANGE_ROUTE};
use crate::error::{BridgeResult, ErrorContext};
use crate::handlers::{handle_health, handle_status_change};

pub fn router(config: Arc<Config>) -> Router {
    Router::new()
        .route(STATUS_CHANGE_ROUTE, get(handle_status_change))
        .route(HEALTH_ROUTE, get(handle_health))
        .with_state(config)
}

/// Serve on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, config: Config) -> BridgeResult<()> {
    let app = router(Arc::new(config));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => warn!("Failed to listen for Ctrl-C: {e}"),
    }
}
