//! Trait definitions for storage

pub mod storage;

pub use storage::LogStorage;
