//! Router setup and configuration

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::api::handlers;
use crate::api::state::AppState;

/// CORS policy: any origin (mirrored so credentials are allowed)
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Create the API router
///
/// Serve with `into_make_service_with_connect_info::<SocketAddr>()`; the
/// submit handler reads the client address from the connection.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/submit-quote", post(handlers::submit_quote))
        .route("/health", get(handlers::health_check))
        .route("/quote-stats", get(handlers::quote_stats));

    Router::new()
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(state.body_limit_bytes))
        .layer(cors_layer())
        .with_state(state)
}
