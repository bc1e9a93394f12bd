//! Router construction and the serve loop.

use crate::api::handlers;
use crate::config::ConversionConfig;
use crate::engine::DocumentEngine;
use crate::error::Url2mdError;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state handed to every handler: the injected engine plus the
/// server-wide base config. Cloned per request; both fields are cheap
/// (an `Arc` and a small struct).
#[derive(Clone)]
pub struct ApiState {
    pub engine: Arc<dyn DocumentEngine>,
    pub config: ConversionConfig,
}

/// Build the application router.
///
/// Exposed separately from [`serve`] so tests can drive the router with
/// `tower::ServiceExt::oneshot` and hosts can nest it under a prefix.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/health", get(handlers::health))
        .route("/convert", post(handlers::convert_post).get(handlers::convert_get))
        // The original deployment sits behind browser clients on arbitrary
        // origins; CORS stays permissive.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` (e.g. `"0.0.0.0:8000"`) and serve until the task is aborted.
pub async fn serve(
    addr: &str,
    engine: Arc<dyn DocumentEngine>,
    config: ConversionConfig,
) -> Result<(), Url2mdError> {
    let engine_name = engine.name().to_string();
    let app = create_router(ApiState { engine, config });

    let listener =
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Url2mdError::BindFailed {
                addr: addr.to_string(),
                source: e,
            })?;

    let local = listener
        .local_addr()
        .map_err(|e| Url2mdError::Internal(format!("local_addr: {e}")))?;
    info!("url2md-server listening on http://{} (engine: {})", local, engine_name);

    axum::serve(listener, app)
        .await
        .map_err(|e| Url2mdError::Internal(format!("server error: {e}")))
}
