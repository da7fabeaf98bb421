//! Unbounded submission channel and its handle

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::sync::{mpsc, oneshot};

use crate::error::ServerError;
use crate::record::CanonicalRecord;

/// Outcome of a committed row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReceipt {
    /// Writer's clock when the append executed
    pub committed_at: DateTime<Local>,

    /// Date column as written
    pub date: String,

    /// Time column as written
    pub time: String,
}

/// A single append request with response channel
#[derive(Debug)]
pub struct AppendRequest {
    /// Record to write
    pub record: CanonicalRecord,

    /// Channel to send the result back to the submitter
    pub response_tx: oneshot::Sender<Result<CommitReceipt, ServerError>>,
}

/// Handle for submitting records to the Sequencer
#[derive(Clone)]
pub struct SequencerHandle {
    tx: mpsc::UnboundedSender<AppendRequest>,

    /// Accepted requests not yet answered (shared with the Sequencer)
    pending: Arc<AtomicUsize>,
}

impl SequencerHandle {
    pub(crate) fn new(tx: mpsc::UnboundedSender<AppendRequest>, pending: Arc<AtomicUsize>) -> Self {
        Self { tx, pending }
    }

    /// Place a record at the tail of the queue
    ///
    /// Never blocks and never rejects on queue depth. The returned receiver
    /// resolves once the row has been written (or failed).
    ///
    /// # Errors
    ///
    /// Returns `ServiceUnavailable` if the Sequencer has shut down.
    pub fn enqueue(
        &self,
        record: CanonicalRecord,
    ) -> Result<oneshot::Receiver<Result<CommitReceipt, ServerError>>, ServerError> {
        let (response_tx, response_rx) = oneshot::channel();

        // Count before sending so the Sequencer never decrements below zero
        self.pending.fetch_add(1, Ordering::AcqRel);
        if self
            .tx
            .send(AppendRequest {
                record,
                response_tx,
            })
            .is_err()
        {
            self.pending.fetch_sub(1, Ordering::AcqRel);
            return Err(ServerError::ServiceUnavailable(
                "sequencer is shut down".into(),
            ));
        }

        Ok(response_rx)
    }

    /// Submit a record and wait for its commit
    ///
    /// The record is accepted when `submit` is called, not when the returned
    /// future is first polled, so rows commit in call order.
    ///
    /// Returns error if:
    /// - Sequencer has shut down
    /// - Sequencer dropped the response channel
    /// - The append failed
    pub fn submit(
        &self,
        record: CanonicalRecord,
    ) -> impl Future<Output = Result<CommitReceipt, ServerError>> + Send + 'static {
        let accepted = self.enqueue(record);

        async move {
            let response_rx = accepted?;
            response_rx
                .await
                .map_err(|_| ServerError::Internal("sequencer dropped response channel".into()))?
        }
    }

    /// Number of accepted requests still waiting for their append
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::Acquire)
    }

    /// Check if the Sequencer has stopped receiving
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
