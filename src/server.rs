//! HTTP server startup and shutdown.

use std::future::Future;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState, ROUTES};
use crate::config::Config;
use crate::error::Result;
use crate::metrics;
use crate::utils::shutdown_signal;

/// Serve the API on an already bound listener until `shutdown` resolves.
///
/// In-flight requests are allowed to finish once shutdown starts.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("HTTP server listening on {}", addr);
    for route in ROUTES {
        info!("  {:<6} {}", route.method, route.path);
    }

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

/// Validate configuration, start the exporter if enabled, and serve until signalled.
pub async fn run(config: &Config) -> Result<()> {
    config.validate()?;

    metrics::init_metrics();
    if let Some(addr) = config.metrics_addr()? {
        metrics::install_exporter(addr)?;
    }

    let listener = TcpListener::bind(config.http_addr()?).await?;
    serve(listener, AppState::from_config(config), shutdown_signal()).await
}
