mod premiere;
mod video_match;

pub use {
    premiere::{PremiereExport, color_code, export_path},
    video_match::find_matching_video,
};
