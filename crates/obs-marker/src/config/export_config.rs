use crate::config::default_premiere_xml;

use serde::{Deserialize, Serialize};

/// Editor import generated after each recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Write a Premiere Pro XML next to the recording when it stops.
    #[serde(default = "default_premiere_xml")]
    pub premiere_xml: bool,

    /// Sequence name (None = dated default).
    #[serde(default)]
    pub sequence_name: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            premiere_xml: default_premiere_xml(),
            sequence_name: None,
        }
    }
}
