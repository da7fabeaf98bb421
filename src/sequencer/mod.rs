//! Sequencer module - serialized appends to the quote log
//!
//! Submitters hand records to a [`SequencerHandle`]; a single [`Sequencer`]
//! task writes them one row at a time in the order they were accepted and
//! answers each submitter on its own channel.

mod buffer;
mod commit;
mod config;
mod core;

pub use buffer::{AppendRequest, CommitReceipt, SequencerHandle};
pub use config::{SequencerConfig, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT};
pub use self::core::Sequencer;
