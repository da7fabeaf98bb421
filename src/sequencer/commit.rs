//! Single-row commit: stamp, encode, append

use std::fmt::Write as _;
use std::sync::Arc;

use chrono::Local;

use crate::error::{ServerError, StorageError};
use crate::record::{encode_entry, CanonicalRecord, LogEntry};
use crate::traits::LogStorage;

use super::buffer::CommitReceipt;
use super::config::SequencerConfig;

/// Write one record to the log
///
/// The date and time columns come from the clock at the moment the append
/// runs, not from when the record was accepted. The storage call runs on
/// the blocking pool and is awaited before returning, so callers that
/// await this one record at a time never overlap appends.
///
/// # Errors
///
/// Returns `ServerError::Storage` if the append fails, `ServerError::Config`
/// if a configured format string cannot be rendered.
pub async fn append_record(
    record: CanonicalRecord,
    storage: &Arc<dyn LogStorage>,
    config: &SequencerConfig,
) -> Result<CommitReceipt, ServerError> {
    let committed_at = Local::now();

    let mut date = String::new();
    write!(date, "{}", committed_at.format(&config.date_format)).map_err(|_| {
        ServerError::Config(format!("invalid date format: {:?}", config.date_format))
    })?;
    let mut time = String::new();
    write!(time, "{}", committed_at.format(&config.time_format)).map_err(|_| {
        ServerError::Config(format!("invalid time format: {:?}", config.time_format))
    })?;

    let row = encode_entry(&LogEntry::new(record, date.clone(), time.clone()));

    let storage = Arc::clone(storage);
    tokio::task::spawn_blocking(move || storage.append(&row))
        .await
        .map_err(StorageError::from)??;

    Ok(CommitReceipt {
        committed_at,
        date,
        time,
    })
}
