//! Premiere Pro (xmeml v4) marker import.
//!
//! Markers are attached twice: to a transparent color-matte clip spanning the
//! sequence and to the sequence itself, since different Premiere versions
//! read one or the other.

use crate::{
    CoreResult, MarkerError,
    export::find_matching_video,
    host::{DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, FrameRate},
    marker::{DEFAULT_COLOR, MarkerLog, MarkerRecord},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use chrono::Local;
use error_location::ErrorLocation;
use tracing::{info, instrument};

/// Extra time after the last marker included in the sequence duration.
const TAIL_MS: u64 = 60_000;

/// Premiere marker colors as 32-bit ARGB codes.
const COLOR_CODES: [(&str, &str); 8] = [
    ("blue", "4294741314"),
    ("cyan", "4294940928"),
    ("green", "4278255360"),
    ("yellow", "4278255615"),
    ("red", "4294901760"),
    ("magenta", "4294902015"),
    ("purple", "4286578816"),
    ("orange", "4294924800"),
];

/// Premiere color code for a color name, blue when unknown.
pub fn color_code(name: &str) -> &'static str {
    let lookup = |wanted: &str| {
        COLOR_CODES
            .iter()
            .find(|(color, _)| color.eq_ignore_ascii_case(wanted))
            .map(|(_, code)| *code)
    };

    lookup(name).or_else(|| lookup(DEFAULT_COLOR)).unwrap_or("4294741314")
}

/// Options for rendering a marker log as a Premiere sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PremiereExport {
    /// Sequence name; a dated default is used when `None`.
    pub sequence_name: Option<String>,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Rate used when the log has no metadata line.
    pub fallback_rate: FrameRate,
}

impl Default for PremiereExport {
    fn default() -> Self {
        Self {
            sequence_name: None,
            width: DEFAULT_OUTPUT_WIDTH,
            height: DEFAULT_OUTPUT_HEIGHT,
            fallback_rate: FrameRate::DEFAULT,
        }
    }
}

impl PremiereExport {
    /// Render `log` as an xmeml document.
    #[track_caller]
    pub fn render(&self, log: &MarkerLog) -> CoreResult<String> {
        let last_ms = log
            .markers
            .iter()
            .map(|m| m.timestamp_ms)
            .max()
            .ok_or_else(|| MarkerError::ExportFailed {
                reason: "No markers to export".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let rate = log
            .metadata
            .as_ref()
            .map(|m| m.frame_rate())
            .unwrap_or(self.fallback_rate);
        let duration = rate.frames_at(last_ms.saturating_add(TAIL_MS)).to_string();
        let name = self.sequence_name.clone().unwrap_or_else(|| {
            format!("OBS Markers ({})", Local::now().format("%Y-%m-%d %H:%M"))
        });

        let mut xml = Xml::default();
        xml.raw("<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
        xml.raw("<!DOCTYPE xmeml>");
        xml.open("xmeml", &[("version", "4")]);
        xml.open("sequence", &[("id", "sequence"), ("explodedTracks", "true")]);
        xml.leaf("uuid", "obs-timestamp-markers-sequence");
        xml.leaf("duration", &duration);
        xml.rate(rate);
        xml.leaf("name", &name);

        xml.open("media", &[]);
        self.video(&mut xml, log, rate, &duration);
        audio(&mut xml);
        xml.close("media");

        xml.open("timecode", &[]);
        xml.rate(rate);
        xml.leaf("string", "00:00:00:00");
        xml.leaf("frame", "0");
        xml.leaf("displayformat", "NDF");
        xml.close("timecode");

        for marker in &log.markers {
            xml.marker(marker, rate);
        }

        xml.close("sequence");
        xml.close("xmeml");

        Ok(xml.finish())
    }

    /// Render `log` and write it to `path`.
    #[track_caller]
    #[instrument(skip(self, log))]
    pub fn write(&self, log: &MarkerLog, path: &Path) -> CoreResult<()> {
        let document = self.render(log)?;

        let mut file = fs::File::create(path).map_err(|e| MarkerError::ExportFailed {
            reason: format!("Failed to create {:?}: {}", path, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        file.write_all(document.as_bytes())
            .map_err(|e| MarkerError::ExportFailed {
                reason: format!("Failed to write {:?}: {}", path, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(path = ?path, markers = log.markers.len(), "Premiere markers exported");

        Ok(())
    }

    /// Read the marker log at `log_path`, choose where the XML belongs and
    /// write it. Returns the path written.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn export_log(&self, log_path: &Path) -> CoreResult<PathBuf> {
        let log = MarkerLog::read(log_path)?;
        let target = export_path(log_path, &log);
        self.write(&log, &target)?;
        Ok(target)
    }

    fn video(&self, xml: &mut Xml, log: &MarkerLog, rate: FrameRate, duration: &str) {
        xml.open("video", &[]);

        xml.open("format", &[]);
        xml.open("samplecharacteristics", &[]);
        xml.rate(rate);
        xml.open("codec", &[]);
        xml.leaf("name", "Apple ProRes 422");
        xml.close("codec");
        xml.leaf("width", &self.width.to_string());
        xml.leaf("height", &self.height.to_string());
        xml.leaf("anamorphic", "FALSE");
        xml.leaf("pixelaspectratio", "square");
        xml.leaf("fielddominance", "none");
        xml.leaf("colordepth", "24");
        xml.close("samplecharacteristics");
        xml.close("format");

        xml.open("track", &[]);
        xml.leaf("enabled", "TRUE");
        xml.leaf("locked", "FALSE");

        xml.open("generatoritem", &[("id", "clipitem-1")]);
        xml.leaf("name", "OBS Marker Holder");
        xml.leaf("enabled", "TRUE");
        xml.leaf("duration", duration);
        xml.rate(rate);
        xml.leaf("start", "0");
        xml.leaf("end", duration);
        xml.leaf("in", "0");
        xml.leaf("out", duration);
        xml.leaf("alphatype", "none");

        xml.open("effect", &[]);
        xml.leaf("name", "Color");
        xml.leaf("effectid", "Color");
        xml.leaf("effectcategory", "Matte");
        xml.leaf("effecttype", "generator");
        xml.leaf("mediatype", "video");
        xml.open("parameter", &[("authoringApp", "PremierePro")]);
        xml.leaf("parameterid", "fillcolor");
        xml.leaf("name", "Color");
        xml.open("value", &[]);
        for channel in ["alpha", "red", "green", "blue"] {
            xml.leaf(channel, "0");
        }
        xml.close("value");
        xml.close("parameter");
        xml.close("effect");

        xml.open("filter", &[]);
        xml.open("effect", &[]);
        xml.leaf("name", "Opacity");
        xml.leaf("effectid", "opacity");
        xml.leaf("effectcategory", "motion");
        xml.leaf("effecttype", "motion");
        xml.leaf("mediatype", "video");
        xml.open("parameter", &[("authoringApp", "PremierePro")]);
        xml.leaf("parameterid", "opacity");
        xml.leaf("name", "opacity");
        xml.leaf("value", "0");
        xml.close("parameter");
        xml.close("effect");
        xml.close("filter");

        for marker in &log.markers {
            xml.marker(marker, rate);
        }

        xml.close("generatoritem");
        xml.close("track");
        xml.close("video");
    }
}

fn audio(xml: &mut Xml) {
    xml.open("audio", &[]);
    xml.leaf("numOutputChannels", "2");
    xml.open("format", &[]);
    xml.open("samplecharacteristics", &[]);
    xml.leaf("depth", "16");
    xml.leaf("samplerate", "48000");
    xml.close("samplecharacteristics");
    xml.close("format");
    for channel in 1..=2 {
        xml.open("track", &[]);
        xml.leaf("enabled", "TRUE");
        xml.leaf("locked", "FALSE");
        xml.leaf("outputchannelindex", &channel.to_string());
        xml.close("track");
    }
    xml.close("audio");
}

/// Where the XML for `log_path` should go.
///
/// Next to the matching recording as `<video>_markers.xml` when one can be
/// found, otherwise next to the log as `<log>_markers.xml`.
pub fn export_path(log_path: &Path, log: &MarkerLog) -> PathBuf {
    let video = log
        .metadata
        .as_ref()
        .filter(|m| !m.recording_path.is_empty())
        .and_then(|m| find_matching_video(Path::new(&m.recording_path), m.started_at()));

    let (dir, stem) = match &video {
        Some(video) => (video.parent(), video.file_stem()),
        None => (log_path.parent(), log_path.file_stem()),
    };

    let file_name = format!(
        "{}_markers.xml",
        stem.map(|s| s.to_string_lossy()).unwrap_or_default()
    );

    match dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Minimal indented XML builder.
#[derive(Default)]
struct Xml {
    out: String,
    depth: usize,
}

impl Xml {
    fn raw(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
    }

    fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.indent();
        self.out.push('<');
        self.out.push_str(tag);
        for (key, value) in attrs {
            self.out.push_str(&format!(" {}=\"{}\"", key, escape(value)));
        }
        self.out.push_str(">\n");
        self.depth += 1;
    }

    fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        self.out.push_str(&format!("</{}>\n", tag));
    }

    fn leaf(&mut self, tag: &str, text: &str) {
        self.indent();
        if text.is_empty() {
            self.out.push_str(&format!("<{}/>\n", tag));
        } else {
            self.out
                .push_str(&format!("<{tag}>{}</{tag}>\n", escape(text)));
        }
    }

    fn rate(&mut self, rate: FrameRate) {
        self.open("rate", &[]);
        self.leaf("timebase", &rate.timebase().to_string());
        self.leaf("ntsc", if rate.is_ntsc() { "TRUE" } else { "FALSE" });
        self.close("rate");
    }

    fn marker(&mut self, marker: &MarkerRecord, rate: FrameRate) {
        self.open("marker", &[]);
        self.leaf("comment", &marker.comment);
        self.leaf("name", &marker.name);
        self.leaf("in", &rate.frames_at(marker.timestamp_ms).to_string());
        self.leaf("out", "-1");
        self.leaf("pproColor", color_code(&marker.color));
        self.close("marker");
    }

    fn finish(self) -> String {
        self.out
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
