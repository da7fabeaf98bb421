//! quote-server library exports (for testing)

pub mod api;
pub mod config;
pub mod error;
pub mod record;
pub mod sequencer;
pub mod storage;
pub mod summary;
pub mod traits;

// Re-exports
pub use error::{ServerError, ServerResult};
pub use sequencer::{Sequencer, SequencerHandle};
pub use storage::CsvLogFile;
pub use traits::LogStorage;
