use crate::{
    CoreResult, MarkerError,
    marker::{MarkerRecord, RecordingMetadata, metadata::MetadataLine},
};

use std::{fs, panic::Location, path::Path};

use error_location::ErrorLocation;
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// A parsed marker log: optional metadata plus every readable marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerLog {
    /// Metadata from the last `{"metadata": ...}` line seen, if any.
    pub metadata: Option<RecordingMetadata>,
    /// Markers in file order.
    pub markers: Vec<MarkerRecord>,
}

impl MarkerLog {
    /// Read a log from disk.
    #[track_caller]
    #[instrument]
    pub fn read(path: &Path) -> CoreResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| MarkerError::LogReadFailure {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self::parse(&contents))
    }

    /// Parse log contents. Unreadable lines are skipped with a warning.
    pub fn parse(contents: &str) -> Self {
        let mut log = Self::default();

        for (index, raw) in contents.lines().enumerate() {
            let line_num = index + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let value: Value = match serde_json::from_str(line) {
                Ok(v) => v,
                Err(e) => {
                    warn!(line_num, error = %e, "Skipping line that is not valid JSON");
                    continue;
                }
            };

            if value.get("metadata").is_some() {
                match serde_json::from_value::<MetadataLine>(value) {
                    Ok(header) => log.metadata = Some(header.metadata),
                    Err(e) => warn!(line_num, error = %e, "Skipping malformed metadata line"),
                }
                continue;
            }

            if value.get("timestamp_ms").is_none() {
                warn!(line_num, "Skipping line without timestamp_ms");
                continue;
            }

            match serde_json::from_value::<MarkerRecord>(value) {
                Ok(marker) => log.markers.push(marker),
                Err(e) => warn!(line_num, error = %e, "Skipping line with invalid marker data"),
            }
        }

        debug!(
            markers = log.markers.len(),
            has_metadata = log.metadata.is_some(),
            "Marker log parsed"
        );

        log
    }
}
