use serde::{Deserialize, Serialize};

use crate::constants;

/// How a media entry is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Video for the known video extensions, image for everything else
    pub fn of(filename: &str) -> Self {
        if is_still_image(filename) {
            MediaKind::Image
        } else {
            MediaKind::Video
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, MediaKind::Image)
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaKind::Video)
    }
}

/// Lower-cased text after the last `.`.
///
/// A name without any `.` is returned whole, lower-cased.
pub fn file_extension(filename: &str) -> String {
    filename
        .rsplit('.')
        .next()
        .unwrap_or(filename)
        .to_lowercase()
}

/// False only for video extensions; unknown or missing extensions count as
/// images.
pub fn is_still_image(filename: &str) -> bool {
    let ext = file_extension(filename);
    !constants::VIDEO_EXTENSIONS.contains(&ext.as_str())
}

/// MIME type guessed from the extension
pub fn content_type(filename: &str) -> String {
    mime_guess::from_path(filename)
        .first_or_octet_stream()
        .to_string()
}
