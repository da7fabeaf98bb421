//! API error response mapping

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::api::dto::ErrorResponse;
use crate::error::ServerError;

/// Message returned for server-side failures; details stay in the logs
const GENERIC_FAILURE: &str = "the request could not be completed";

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            GENERIC_FAILURE.to_string()
        } else {
            self.to_string()
        };

        let body = ErrorResponse {
            success: false,
            error: self.error_code().to_string(),
            message,
            recoverable: self.is_recoverable(),
        };

        (status, Json(body)).into_response()
    }
}
