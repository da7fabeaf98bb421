//! Log storage trait definition

use crate::error::StorageError;

/// Backing store for the append-only quote log
///
/// Methods are synchronous; the sequencer and summary reader call them on
/// the blocking thread pool. Only the sequencer calls [`LogStorage::append`].
pub trait LogStorage: Send + Sync + 'static {
    /// Create the log with its header row if it does not exist yet
    ///
    /// Idempotent: an existing log (and its header) is never rewritten.
    fn initialize(&self) -> Result<(), StorageError>;

    /// Append one encoded, newline-terminated row to the end of the log
    ///
    /// The whole row is handed to the OS in a single write so a concurrent
    /// reader never sees half of it.
    fn append(&self, row: &str) -> Result<(), StorageError>;

    /// Read the full log content, `None` if the log does not exist
    fn read_all(&self) -> Result<Option<String>, StorageError>;

    /// Check if the log exists
    fn is_initialized(&self) -> bool;
}
