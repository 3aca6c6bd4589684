#[allow(clippy::module_inception)]
mod config;
mod export_config;
mod host_config;
mod hotkey_config;
mod output_config;

pub(crate) use {
    config::Config, export_config::ExportConfig, host_config::HostConfig,
    hotkey_config::HotkeyConfig, output_config::OutputConfig,
};

pub(crate) const DEFAULT_HOTKEY_BINDING: &str = "ctrl+shift+KeyM";
pub(crate) const DEFAULT_PREMIERE_XML: bool = true;
pub(crate) const MARKER_LOG_FILE: &str = "timestamps.jsonl";

pub(crate) fn default_hotkey_binding() -> String {
    DEFAULT_HOTKEY_BINDING.to_string()
}

pub(crate) fn default_premiere_xml() -> bool {
    DEFAULT_PREMIERE_XML
}
