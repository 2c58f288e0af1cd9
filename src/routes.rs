use axum::{
    body::Body,
    http::Request,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info_span;
use uuid::Uuid;

use crate::handlers;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", get(handlers::health_check))

        // Proxy routes
        .route("/chat", post(handlers::chat))
        .route("/api/translate", post(handlers::translate))
        .route("/api/tts", post(handlers::tts))
}

/// Full application: routes, request tracing and permissive CORS.
pub fn create_app(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        info_span!(
            "request",
            id = %Uuid::new_v4(),
            method = %request.method(),
            uri = %request.uri(),
        )
    });

    Router::new()
        .merge(create_routes())
        .layer(
            ServiceBuilder::new()
                .layer(trace)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
