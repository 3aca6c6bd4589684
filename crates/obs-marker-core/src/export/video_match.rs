use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use tracing::{debug, warn};

/// Extensions the host writes recordings with.
const VIDEO_EXTENSIONS: [&str; 6] = ["mp4", "mkv", "flv", "mov", "avi", "ts"];

/// A recording closer than this to the metadata timestamp is preferred.
const MATCH_WINDOW_SECS: i64 = 300;

/// Find the recording a marker log belongs to.
///
/// Returns the newest video in `recording_dir` whose modification time is
/// within five minutes of `started_at`, or the newest video overall.
pub fn find_matching_video(
    recording_dir: &Path,
    started_at: Option<NaiveDateTime>,
) -> Option<PathBuf> {
    let entries = match fs::read_dir(recording_dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = ?recording_dir, error = %e, "Cannot scan recording directory");
            return None;
        }
    };

    let mut videos: Vec<(PathBuf, SystemTime)> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_video(path))
        .filter_map(|path| {
            let modified = fs::metadata(&path).and_then(|m| m.modified()).ok()?;
            Some((path, modified))
        })
        .collect();

    // Newest first.
    videos.sort_by(|a, b| b.1.cmp(&a.1));

    let anchor = started_at.and_then(|naive| Local.from_local_datetime(&naive).earliest());
    if let Some(anchor) = anchor {
        let close = videos.iter().find(|(_, modified)| {
            let modified: DateTime<Local> = (*modified).into();
            (modified - anchor).num_seconds().abs() < MATCH_WINDOW_SECS
        });
        if let Some((path, _)) = close {
            debug!(video = ?path, "Matched recording by timestamp");
            return Some(path.clone());
        }
    }

    videos.into_iter().next().map(|(path, _)| path)
}

fn is_video(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
