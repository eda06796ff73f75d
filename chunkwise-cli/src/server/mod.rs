//! HTTP service exposing the split operation

use crate::error::CliError;
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chunkwise_core::{ChunkProcessor, SplitResponse};
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Shared handler state
#[derive(Clone, Debug)]
pub struct AppState {
    processor: Arc<ChunkProcessor>,
}

impl AppState {
    /// Wrap a processor for sharing across requests
    pub fn new(processor: ChunkProcessor) -> Self {
        Self {
            processor: Arc::new(processor),
        }
    }
}

/// Errors returned by handlers
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Core(#[from] chunkwise_core::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::Core(chunkwise_core::Error::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    tokenizer: String,
}

/// Build the router: `POST /split` and `GET /health`
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/split", post(split))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

async fn split(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SplitResponse>, ServerError> {
    let processor = Arc::clone(&state.processor);
    let response = tokio::task::spawn_blocking(move || processor.handle_request(&body))
        .await
        .map_err(|e| ServerError::Internal(format!("split task failed: {e}")))??;

    log::debug!("Returning {} chunks", response.chunks.len());
    Ok(Json(response))
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        tokenizer: state.processor.tokenizer().name().to_string(),
    })
}

/// Serve until Ctrl+C or SIGTERM
pub async fn run(addr: SocketAddr, processor: ChunkProcessor) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| CliError::ServerError(format!("failed to bind {addr}: {e}")))?;

    log::info!("Listening on http://{addr}");
    log::info!("  POST /split - split text into token windows");
    log::info!("  GET /health - liveness probe");

    axum::serve(listener, build_router(AppState::new(processor)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CliError::ServerError(e.to_string()))?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log::info!("Received Ctrl+C, shutting down gracefully");
        },
        _ = terminate => {
            log::info!("Received SIGTERM, shutting down gracefully");
        },
    }
}
