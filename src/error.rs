use thiserror::Error;

/// Errors returned by the strict lookups of this crate.
///
/// The display-config codec and URL builders never fail; these variants
/// only come from parsing typed values out of user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unknown sort key: {0:?}")]
    UnknownSortKey(String),

    #[error("unknown entry type tag: {0}")]
    UnknownEntryType(u8),

    #[error("server url cannot be empty")]
    EmptyServerUrl,

    #[error("expected key=value, got {0:?}")]
    InvalidParam(String),
}

pub type Result<T> = std::result::Result<T, Error>;
