//! Data Transfer Objects (DTOs)

mod request;
mod response;

pub use request::QuoteRequest;
pub use response::{ErrorResponse, HealthResponse, SubmitResponse};
