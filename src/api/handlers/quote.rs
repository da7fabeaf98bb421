//! Quote submission and statistics handlers

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{ConnectInfo, State},
    Json,
};
use tracing::{debug, error, warn};

use crate::api::dto::{QuoteRequest, SubmitResponse};
use crate::api::state::AppState;
use crate::error::ServerError;
use crate::record::validate;
use crate::summary::{read_summary, LogSummary};

/// POST /api/submit-quote - Validate and queue a quote request
///
/// Responds once the row has been written to the log.
pub async fn submit_quote(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    body: Bytes,
) -> Result<Json<SubmitResponse>, ServerError> {
    let req: QuoteRequest = serde_json::from_slice(&body)
        .map_err(|e| ServerError::InvalidArgument(format!("Invalid JSON: {}", e)))?;

    let client_ip = addr.ip().to_canonical().to_string();
    let record = validate(req.into_submission(Some(client_ip)), &state.limits)
        .inspect_err(|e| warn!(reason = e.reason(), client = %addr, "Rejected quote submission"))?;

    debug!(pending = state.sequencer.pending(), "Queueing quote request");
    let receipt = state.sequencer.submit(record).await?;

    Ok(Json(SubmitResponse {
        success: true,
        message: "Quote request saved".to_string(),
        timestamp: receipt.committed_at.to_rfc3339(),
    }))
}

/// GET /api/quote-stats - Row count and most recent date
pub async fn quote_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LogSummary>, ServerError> {
    let summary = read_summary(&state.storage)
        .await
        .inspect_err(|e| error!(error = %e, "Failed to read quote statistics"))?;
    Ok(Json(summary))
}
