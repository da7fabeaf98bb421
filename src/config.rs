//! Server configuration

use std::path::PathBuf;

use crate::record::ValidationLimits;
use crate::sequencer::SequencerConfig;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 2999;

/// Default location of the quote log
pub const DEFAULT_LOG_PATH: &str = "./database/teklif.csv";

/// Largest accepted request body
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    /// Path of the CSV quote log
    pub log_path: PathBuf,

    /// tracing filter directive
    pub log_level: String,

    /// Submission field bounds
    pub limits: ValidationLimits,

    /// Commit date/time formatting
    pub sequencer: SequencerConfig,

    /// Maximum request body size in bytes
    pub body_limit_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            log_level: "info".to_string(),
            limits: ValidationLimits::default(),
            sequencer: SequencerConfig::default(),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl Config {
    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
