//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::record::ValidationLimits;
use crate::sequencer::SequencerHandle;
use crate::traits::LogStorage;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Submission queue (sole path to the log for writes)
    pub sequencer: SequencerHandle,

    /// Read access to the log for the summary endpoint
    pub storage: Arc<dyn LogStorage>,

    /// Field bounds applied by the validator
    pub limits: ValidationLimits,

    /// Maximum request body size in bytes
    pub body_limit_bytes: usize,
}
