//! Storage module
//!
//! Provides the CSV file backend for the quote log.

pub mod csv_log;

pub use crate::traits::LogStorage;
pub use csv_log::CsvLogFile;
