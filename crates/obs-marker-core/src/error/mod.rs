use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Marker log errors with source location tracking.
///
/// None of these ever reach the host. The session absorbs them and reports
/// them through `tracing`.
#[derive(Error, Debug)]
pub enum MarkerError {
    /// Host configuration could not be read.
    #[error("Host configuration unavailable: {reason} {location}")]
    ConfigUnavailable {
        /// Why the configuration could not be read.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Host configuration was read but a field was missing or out of range.
    #[error("Malformed host configuration: {reason} {location}")]
    MalformedHostConfig {
        /// Description of the offending field.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No output path has been configured for the marker log.
    #[error("Marker output path not set {location}")]
    OutputPathUnset {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The marker log could not be opened for writing.
    #[error("Failed to open marker file {path:?}: {source} {location}")]
    FileOpenFailure {
        /// Path of the marker log.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A line could not be serialized or written to the marker log.
    #[error("Failed to write marker file {path:?}: {reason} {location}")]
    WriteFailure {
        /// Path of the marker log.
        path: PathBuf,
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// An existing marker log could not be read.
    #[error("Failed to read marker log {path:?}: {source} {location}")]
    LogReadFailure {
        /// Path of the marker log.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Converting a marker log into an editor import file failed.
    #[error("Export failed: {reason} {location}")]
    ExportFailed {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`MarkerError`].
pub type Result<T> = std::result::Result<T, MarkerError>;
