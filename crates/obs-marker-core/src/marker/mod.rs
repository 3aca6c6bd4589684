mod log;
pub(crate) mod metadata;
mod record;
mod writer;

pub use {
    log::MarkerLog,
    metadata::{METADATA_TIMESTAMP_FORMAT, RecordingMetadata},
    record::{DEFAULT_COLOR, END_COLOR, END_COMMENT, MarkerRecord, START_COMMENT},
    writer::MarkerWriter,
};
