//! HTTP request handlers

mod health;
mod quote;

pub use health::health_check;
pub use quote::{quote_stats, submit_quote};
