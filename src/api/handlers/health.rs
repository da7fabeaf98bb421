//! Health check handler

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /api/health - Liveness probe
///
/// Does not touch the log; always 200 while the process serves requests.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Backend server is running".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        pending_writes: state.sequencer.pending(),
    })
}
