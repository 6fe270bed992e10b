//! Server lifecycle: bind, serve, stop on cancellation.

use axum::Router;
use std::io;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Serve `router` on `address` until `shutdown` is cancelled.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve(router: Router, address: &str, shutdown: CancellationToken) -> io::Result<()> {
    let listener = TcpListener::bind(address).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Server stopped");
    Ok(())
}
