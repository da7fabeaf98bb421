//! Common test utilities and fixtures
//!
//! This module provides shared test infrastructure including:
//! - Test app setup backed by a temporary CSV log
//! - Instrumented storage for ordering and overlap checks
//! - JSON request helpers

#![allow(dead_code, unused_imports)]


pub use fixtures::*;

// Re-export frequently used external types for convenience
pub use axum::body::Body;
pub use axum::http::{Request, StatusCode};
pub use serde_json::json;
pub use std::sync::Arc;
pub use tower::ServiceExt;
