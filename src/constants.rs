/// Application name
pub const APP_NAME: &str = "galleryview";

/// Seconds each media item stays on screen during playback
pub const DEFAULT_PLAY_SECS: u32 = 5;

/// Base API URL used during local testing
pub const SERVER_URL_LOCAL: &str = "http://127.0.0.1:8080/api";

/// Base API URL relative to the current page (production)
pub const SERVER_URL_RELATIVE: &str = "api";

/// Base API URL relative to the site root
pub const SERVER_URL_ROOT: &str = "/api";

/// Wire tag the listing API uses for directory entries
pub const FOLDER_TAG: u8 = 1;

/// Wire tag the listing API uses for media entries
pub const IMAGE_TAG: u8 = 0;

/// Extensions played as video; everything else is shown as a still image
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov"];

/// Sort key of the empty display config
pub const DEFAULT_SORT: &str = "name";

/// Separator between encoded display-config fields
pub const CONFIG_SEPARATOR: char = '-';
