//! Read-only summary of the quote log

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::error::{ServerError, StorageError};
use crate::record::decode_records;
use crate::traits::LogStorage;

/// Aggregate view of the log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogSummary {
    /// Number of data rows (header excluded)
    #[serde(rename = "totalQuotes")]
    pub total_count: u64,

    /// Date column of the most recent row
    #[serde(rename = "lastQuote")]
    pub last_date: Option<String>,
}

/// Summarize log content
///
/// Blank rows are ignored and the first remaining row is taken to be the
/// header. Quoted fields spanning several lines count as one row. Content
/// that does not decode (a row still being written, or a damaged line) is
/// counted line by line instead, so a readable log always yields a summary.
pub fn summarize(content: &str) -> LogSummary {
    match decode_records(content) {
        Ok(rows) => summarize_rows(rows),
        Err(e) => {
            warn!(error = %e, "Quote log did not decode; counting lines");
            summarize_lines(content)
        }
    }
}

fn summarize_rows(rows: Vec<Vec<String>>) -> LogSummary {
    let rows: Vec<Vec<String>> = rows.into_iter().filter(|row| !is_blank(row)).collect();

    let total_count = rows.len().saturating_sub(1) as u64;
    let last_date = if total_count > 0 {
        rows.last().and_then(|row| row.first()).cloned()
    } else {
        None
    };

    LogSummary {
        total_count,
        last_date,
    }
}

fn summarize_lines(content: &str) -> LogSummary {
    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();

    let total_count = lines.len().saturating_sub(1) as u64;
    let last_date = match lines.last() {
        Some(line) if total_count > 0 => Some(first_field(line)),
        _ => None,
    };

    LogSummary {
        total_count,
        last_date,
    }
}

/// Leading column of a raw line; dates never contain the separator
fn first_field(line: &str) -> String {
    let field = line.split(',').next().unwrap_or_default();
    field.trim_matches('"').to_string()
}

fn is_blank(row: &[String]) -> bool {
    row.len() == 1 && row[0].trim().is_empty()
}

/// Scan the whole log and summarize it
///
/// A missing log is not an error and yields `{0, null}`. The file read runs
/// on the blocking pool.
///
/// # Errors
///
/// Returns `ServerError::Storage` if the log exists but cannot be read.
pub async fn read_summary(storage: &Arc<dyn LogStorage>) -> Result<LogSummary, ServerError> {
    let storage = Arc::clone(storage);
    let content = tokio::task::spawn_blocking(move || storage.read_all())
        .await
        .map_err(StorageError::from)??;

    match content {
        Some(content) => Ok(summarize(&content)),
        None => Ok(LogSummary::default()),
    }
}
