//! Listener setup and the server loop.

use axum::Router;
use lectern_error::{ServerError, ServerErrorKind};
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// Binds a TCP listener on `addr`.
///
/// # Errors
///
/// Returns an error if the address is malformed or already in use.
#[instrument]
pub async fn bind(addr: &str) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            addr: addr.to_string(),
            message: e.to_string(),
        })
    })
}

/// Serves `router` on `listener` until Ctrl+C.
///
/// # Errors
///
/// Returns an error if the server loop fails.
#[instrument(skip_all)]
pub async fn serve(listener: TcpListener, router: Router) -> Result<(), ServerError> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Lectern listening");
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Lectern stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for Ctrl+C; serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
