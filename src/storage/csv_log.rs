//! CSV file backed log storage

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::StorageError;
use crate::record::HEADER;
use crate::traits::LogStorage;

/// Append-only CSV log on the local filesystem
#[derive(Debug, Clone)]
pub struct CsvLogFile {
    path: PathBuf,
}

impl CsvLogFile {
    /// Create a handle for the log at `path` (nothing is touched on disk)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory and the file with its header
    ///
    /// Returns `false` if the file already existed; its content is left
    /// untouched.
    fn create_with_header(&self) -> Result<bool, StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // create_new keeps an existing header untouched even if two
        // processes race on startup
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(mut file) => {
                file.write_all(HEADER.as_bytes())?;
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

impl LogStorage for CsvLogFile {
    fn initialize(&self) -> Result<(), StorageError> {
        if self.create_with_header()? {
            info!(path = %self.path.display(), "Created quote log with header");
        }
        Ok(())
    }

    fn append(&self, row: &str) -> Result<(), StorageError> {
        if !self.path.exists() && self.create_with_header()? {
            warn!(path = %self.path.display(), "Quote log was missing; recreated with header");
        }

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(row.as_bytes())?;
        Ok(())
    }

    fn read_all(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn is_initialized(&self) -> bool {
        self.path.is_file()
    }
}
