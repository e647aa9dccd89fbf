//! HTTP façade forwarding client-record operations to an external API.
//!
//! # Overview
//! `POST /clientes`, `GET /clientes/{id}` and `PUT /clientes/{id}` are
//! validated locally, forwarded to the configured external client API, and
//! answered with the upstream body (projected to `id`/`name`/`email` on
//! read). Failures are rendered as `{"message": ..., ...}` with a status
//! from a fixed taxonomy. `GET /health` never touches the upstream.
//!
//! # Design
//! - `Config` is read once and injected; there is no global state.
//! - The network sits behind `HttpTransport` so tests can substitute it.
//! - Handlers return `ApiError`, rendered in one place by its
//!   `IntoResponse` impl.

pub mod config;
pub mod error;
pub mod routes;
pub mod service;
pub mod transport;
pub mod upstream;

use std::future::Future;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::{Cli, Config, ConfigError};
pub use error::ApiError;
pub use service::ClientesService;
pub use transport::{HttpTransport, ReqwestTransport, UPSTREAM_TIMEOUT};
pub use upstream::UpstreamClient;

pub fn app(service: ClientesService) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .merge(routes::router())
        .fallback(routes::not_found)
        .method_not_allowed_fallback(routes::method_not_allowed)
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(error::panic_response))
}

pub async fn run<F>(
    listener: TcpListener,
    service: ClientesService,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(service))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, shutting down");
}
