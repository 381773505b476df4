use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants;
use crate::error::Error;

/// How a media listing is ordered and rendered.
///
/// Built from UI state, carried in the URL as the hyphen-joined string
/// produced by [`crate::codec::encode_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    /// Sort key, normally one of the [`SortKey`] wire names
    pub sort: String,
    /// Reverse the sort order
    pub reverse: bool,
    /// Show unprocessed originals instead of previews
    pub raw: bool,
    /// Descend into subfolders
    pub recursive: bool,
    /// Seed for random ordering, `0` when unset
    pub rand_seed: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            sort: constants::DEFAULT_SORT.to_string(),
            reverse: false,
            raw: false,
            recursive: false,
            rand_seed: 0,
        }
    }
}

impl DisplayConfig {
    /// The typed sort key, if `sort` names a known one
    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort.parse().ok()
    }

    pub fn is_random(&self) -> bool {
        matches!(self.sort_key(), Some(SortKey::Random))
    }
}

/// Sort keys understood by the listing API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Taken,
    Modified,
    Random,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::Taken,
        SortKey::Modified,
        SortKey::Random,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Taken => "taken",
            SortKey::Modified => "modified",
            SortKey::Random => "random",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::UnknownSortKey(s.to_string()))
    }
}

/// Tag distinguishing directory entries from media entries.
///
/// Travels as the integer the listing API uses (`Folder = 1`, `Image = 0`).
/// Whether an image entry is actually a video is derived from its name,
/// see [`crate::media::MediaKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum EntryType {
    Folder,
    Image,
}

impl EntryType {
    pub fn tag(self) -> u8 {
        match self {
            EntryType::Folder => constants::FOLDER_TAG,
            EntryType::Image => constants::IMAGE_TAG,
        }
    }
}

impl From<EntryType> for u8 {
    fn from(entry_type: EntryType) -> Self {
        entry_type.tag()
    }
}

impl TryFrom<u8> for EntryType {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            constants::FOLDER_TAG => Ok(EntryType::Folder),
            constants::IMAGE_TAG => Ok(EntryType::Image),
            other => Err(Error::UnknownEntryType(other)),
        }
    }
}

/// A media file directly inside the listed folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub name: String,
}

/// A media file found by a recursive listing, with the folder it lives in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItemInDir {
    pub dir: String,
    pub name: String,
}

/// A subfolder of the listed folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderItem {
    pub name: String,
    /// Name of a media file to use as the folder's thumbnail
    pub media: Option<String>,
}

/// One page of a folder listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderListing {
    pub media: Vec<MediaItem>,
    /// Only populated on the first page
    #[serde(default)]
    pub folders: Vec<FolderItem>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

/// One page of a recursive listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecursiveListing {
    pub media: Vec<MediaItemInDir>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl FolderListing {
    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.page_size)
    }

    pub fn is_last_page(&self) -> bool {
        self.page.saturating_add(1) >= self.total_pages()
    }
}

impl RecursiveListing {
    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.page_size)
    }

    pub fn is_last_page(&self) -> bool {
        self.page.saturating_add(1) >= self.total_pages()
    }
}

fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_empty_name_sort() {
        let cfg = DisplayConfig::default();
        assert_eq!(cfg.sort, "name");
        assert!(!cfg.reverse && !cfg.raw && !cfg.recursive);
        assert_eq!(cfg.rand_seed, 0);
        assert_eq!(cfg.sort_key(), Some(SortKey::Name));
    }

    #[test]
    fn sort_keys_contain_no_separator() {
        for key in SortKey::ALL {
            assert!(!key.as_str().contains(constants::CONFIG_SEPARATOR));
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
    }

    #[test]
    fn unknown_sort_key_is_an_error() {
        assert_eq!(
            "size".parse::<SortKey>(),
            Err(Error::UnknownSortKey("size".to_string()))
        );
        let cfg = DisplayConfig {
            sort: "size".to_string(),
            ..Default::default()
        };
        assert_eq!(cfg.sort_key(), None);
        assert!(!cfg.is_random());
    }

    #[test]
    fn entry_type_uses_integer_tags() {
        assert_eq!(serde_json::to_string(&EntryType::Folder).unwrap(), "1");
        assert_eq!(serde_json::to_string(&EntryType::Image).unwrap(), "0");
        assert_eq!(
            serde_json::from_str::<EntryType>("1").unwrap(),
            EntryType::Folder
        );
        assert!(serde_json::from_str::<EntryType>("7").is_err());
        assert_eq!(EntryType::try_from(7), Err(Error::UnknownEntryType(7)));
    }

    #[test]
    fn listing_page_math() {
        let listing = FolderListing {
            media: vec![],
            folders: vec![],
            page: 1,
            page_size: 50,
            total: 101,
        };
        assert_eq!(listing.total_pages(), 3);
        assert!(!listing.is_last_page());

        let empty = RecursiveListing {
            media: vec![],
            page: 0,
            page_size: 0,
            total: 0,
        };
        assert_eq!(empty.total_pages(), 0);
        assert!(empty.is_last_page());

        let runaway = FolderListing {
            page: usize::MAX,
            ..listing
        };
        assert!(runaway.is_last_page());
    }
}
