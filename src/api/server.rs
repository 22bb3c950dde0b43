//! Server startup for the rent proration API.

use std::future::Future;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;

use super::handlers::create_router;
use super::state::AppState;

/// Binds the configured address and serves the API until `shutdown` resolves.
pub async fn start_server<F>(config: ServerConfig, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(config.bind_address()).await?;
    serve(listener, AppState::new(config), shutdown).await
}

/// Serves the API on an already-bound listener until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!(
        address = %listener.local_addr()?,
        environment = %state.config().environment,
        "Listening for requests"
    );

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}
