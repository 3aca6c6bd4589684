//! Open-write-close JSON Lines writer for the marker log.
//!
//! No file handle outlives a call, so a crash mid-session can lose at most
//! the line being written.

use crate::{
    CoreResult, MarkerError,
    marker::{MarkerRecord, RecordingMetadata, metadata::MetadataLine},
};

use std::{
    fs::OpenOptions,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use serde::Serialize;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteMode {
    Truncate,
    Append,
}

/// Writes marker and metadata lines to a single log file.
#[derive(Debug, Clone, Default)]
pub struct MarkerWriter {
    path: Option<PathBuf>,
}

impl MarkerWriter {
    /// Create a writer. An empty path leaves the writer unset.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            path: (!path.as_os_str().is_empty()).then_some(path),
        }
    }

    /// Destination path, if one is configured.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Replace the destination. Empty paths are rejected and return `false`.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return false;
        }
        self.path = Some(path);
        true
    }

    /// Truncate the log and write the metadata line followed by `first`.
    #[track_caller]
    #[instrument(skip(self, metadata, first))]
    pub fn begin(&self, metadata: &RecordingMetadata, first: &MarkerRecord) -> CoreResult<()> {
        let header = MetadataLine {
            metadata: metadata.clone(),
        };
        let lines = [self.encode(&header)?, self.encode(first)?];
        self.write_lines(WriteMode::Truncate, &lines)
    }

    /// Append one marker line.
    #[track_caller]
    #[instrument(skip(self, record), fields(timestamp_ms = record.timestamp_ms))]
    pub fn append(&self, record: &MarkerRecord) -> CoreResult<()> {
        let line = self.encode(record)?;
        self.write_lines(WriteMode::Append, std::slice::from_ref(&line))
    }

    #[track_caller]
    fn encode<T: Serialize>(&self, value: &T) -> CoreResult<String> {
        let path = self.require_path()?;
        serde_json::to_string(value).map_err(|e| MarkerError::WriteFailure {
            path: path.to_path_buf(),
            reason: format!("Failed to serialize line: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn require_path(&self) -> CoreResult<&Path> {
        self.path.as_deref().ok_or_else(|| MarkerError::OutputPathUnset {
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn write_lines(&self, mode: WriteMode, lines: &[String]) -> CoreResult<()> {
        let path = self.require_path()?;

        let mut options = OpenOptions::new();
        match mode {
            WriteMode::Truncate => options.write(true).create(true).truncate(true),
            WriteMode::Append => options.append(true).create(true),
        };

        let mut file = options
            .open(path)
            .map_err(|source| MarkerError::FileOpenFailure {
                path: path.to_path_buf(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        // One buffer, one write: the line and its newline land together.
        let mut buffer = String::new();
        for line in lines {
            buffer.push_str(line);
            buffer.push('\n');
        }

        file.write_all(buffer.as_bytes())
            .map_err(|e| MarkerError::WriteFailure {
                path: path.to_path_buf(),
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(path = ?path, lines = lines.len(), ?mode, "Marker lines written");

        Ok(())
    }
}
