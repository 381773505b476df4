//! Helpers for a file-gallery frontend: query-string URL builders, the
//! compact display-config codec, a seeded shuffle for random ordering, and
//! extension-based media classification.

pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod media;
pub mod models;
pub mod shuffle;
pub mod url;

pub use codec::{decode_config, encode_config};
pub use config::{Config, ServerUrl};
pub use error::{Error, Result};
pub use media::{content_type, file_extension, is_still_image, MediaKind};
pub use models::{DisplayConfig, EntryType, SortKey};
pub use shuffle::{fresh_seed, shuffle_in_place, Lcg};
pub use url::{parse_pair, trim_prefix, QueryParams, UrlBuilder};
