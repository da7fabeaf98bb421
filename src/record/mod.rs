//! Quote-request records: validation of raw submissions and the CSV row codec
//!
//! A [`Submission`] arrives from the HTTP layer, is turned into a
//! [`CanonicalRecord`] by [`validate`], and becomes a [`LogEntry`] once the
//! sequencer stamps it with the commit date and time.

pub mod codec;
pub mod submission;

pub use codec::{
    decode_line, decode_records, encode_entry, encode_field, LogEntry, FIELD_COUNT, HEADER,
};
pub use submission::{validate, CanonicalRecord, Submission, ValidationLimits};
