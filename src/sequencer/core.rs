//! Sequencer core logic - one append at a time, in arrival order

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::traits::LogStorage;

use super::buffer::{AppendRequest, SequencerHandle};
use super::commit::append_record;
use super::config::SequencerConfig;

/// The Sequencer is the sole writer of the quote log
///
/// Requests are taken off the channel in the order they were accepted and
/// each append is awaited before the next request is received.
pub struct Sequencer {
    /// Storage backend
    storage: Arc<dyn LogStorage>,

    /// Configuration
    config: SequencerConfig,

    /// Receiver for incoming requests
    rx: mpsc::UnboundedReceiver<AppendRequest>,

    /// Accepted but unanswered requests (shared with handles)
    pending: Arc<AtomicUsize>,
}

impl Sequencer {
    /// Create a new Sequencer and return its handle
    pub fn new(storage: Arc<dyn LogStorage>, config: SequencerConfig) -> (Self, SequencerHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let pending = Arc::new(AtomicUsize::new(0));

        let sequencer = Self {
            storage,
            config,
            rx,
            pending: Arc::clone(&pending),
        };

        (sequencer, SequencerHandle::new(tx, pending))
    }

    /// Run the Sequencer loop (spawn as tokio task)
    ///
    /// Returns once every handle has been dropped and the requests accepted
    /// before that have been written.
    pub async fn run(mut self) {
        info!(
            date_format = %self.config.date_format,
            time_format = %self.config.time_format,
            "Sequencer started"
        );

        let mut committed: u64 = 0;
        let mut failed: u64 = 0;

        while let Some(request) = self.rx.recv().await {
            let AppendRequest {
                record,
                response_tx,
            } = request;
            let name = record.name().to_string();
            let product = record.product_name().to_string();

            let result = append_record(record, &self.storage, &self.config).await;
            match &result {
                Ok(receipt) => {
                    committed += 1;
                    info!(
                        name = %name,
                        product = %product,
                        date = %receipt.date,
                        time = %receipt.time,
                        "Quote request saved"
                    );
                }
                Err(e) => {
                    failed += 1;
                    error!(name = %name, error = %e, "Failed to append quote row");
                }
            }

            self.pending.fetch_sub(1, Ordering::AcqRel);

            // Ignore send error (submitter may have gone away)
            if response_tx.send(result).is_err() {
                debug!(name = %name, "Submitter dropped before commit result");
            }
        }

        info!(committed, failed, "Sequencer shutting down");
    }
}
