use crate::{MarkerError, MarkerLog, MarkerRecord};

use tempfile::TempDir;

/// WHAT: A well-formed log yields metadata and markers in order
/// WHY: The exporter needs both the frame rate and the markers
#[test]
fn given_session_log_when_parsed_then_metadata_and_markers_extracted() {
    // Given: A log as the session writes it
    let contents = concat!(
        "{\"metadata\":{\"recording_path\":\"/videos\",\"timestamp\":\"2026-03-14 09:30:00\",\"fps_num\":30000,\"fps_den\":1001}}\n",
        "{\"timestamp_ms\":0,\"comment\":\"Recording Start\",\"name\":\"\",\"color\":\"blue\"}\n",
        "{\"timestamp_ms\":1200,\"comment\":\"Marker 1\",\"name\":\"\",\"color\":\"blue\"}\n",
    );

    // When: Parsing
    let log = MarkerLog::parse(contents);

    // Then: Everything is present
    let metadata = log.metadata.as_ref().map(|m| (m.fps_num, m.fps_den));
    assert_eq!(metadata, Some((30_000, 1001)));
    assert_eq!(log.markers.len(), 2);
    assert_eq!(log.markers[1].timestamp_ms, 1_200);
}

/// WHAT: Bad lines are skipped without losing good ones
/// WHY: A crash can leave a partial last line
#[test]
fn given_corrupt_and_blank_lines_when_parsed_then_skipped() {
    // Given: Blank, truncated and field-less lines between valid ones
    let contents = concat!(
        "{\"timestamp_ms\":0,\"comment\":\"Recording Start\",\"name\":\"\",\"color\":\"blue\"}\n",
        "\n",
        "{\"comment\":\"no time\"}\n",
        "{\"timestamp_ms\":\"soon\"}\n",
        "{\"timestamp_ms\":500,\"comment\":\"Mar",
    );

    // When: Parsing
    let log = MarkerLog::parse(contents);

    // Then: Only the first marker survives
    assert!(log.metadata.is_none());
    assert_eq!(log.markers, vec![MarkerRecord::recording_start()]);
}

/// WHAT: Missing optional fields take their defaults
/// WHY: Hand-edited logs may omit name and color
#[test]
fn given_minimal_marker_when_parsed_then_defaults_applied() {
    let log = MarkerLog::parse("{\"timestamp_ms\": 750}");

    assert_eq!(log.markers.len(), 1);
    assert_eq!(log.markers[0].comment, "");
    assert_eq!(log.markers[0].name, "");
    assert_eq!(log.markers[0].color, "blue");
}

/// WHAT: Reading a missing file reports LogReadFailure
/// WHY: Export failures must name the log that was missing
#[test]
#[allow(clippy::unwrap_used)]
fn given_missing_file_when_read_then_log_read_failure() {
    let dir = TempDir::new().unwrap();

    let result = MarkerLog::read(&dir.path().join("absent.jsonl"));

    assert!(matches!(result, Err(MarkerError::LogReadFailure { .. })));
}
