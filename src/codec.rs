//! Compact string form of [`DisplayConfig`] for URL query parameters.
//!
//! The encoding is `<sort>-<reverse>-<raw>-<recursive>-<seed>` with the
//! flags written as `0`/`1`. Nothing is escaped, so sort keys must not
//! contain `-`. Decoding never fails: malformed input degrades to
//! defaults.

use std::fmt;

use crate::constants::CONFIG_SEPARATOR;
use crate::models::DisplayConfig;

pub fn encode_config(cfg: &DisplayConfig) -> String {
    format!(
        "{sort}{sep}{reverse}{sep}{raw}{sep}{recursive}{sep}{seed}",
        sort = cfg.sort,
        sep = CONFIG_SEPARATOR,
        reverse = flag(cfg.reverse),
        raw = flag(cfg.raw),
        recursive = flag(cfg.recursive),
        seed = cfg.rand_seed,
    )
}

pub fn decode_config(s: &str) -> DisplayConfig {
    let mut fields = s.split(CONFIG_SEPARATOR);
    // split always yields at least one item
    let sort = fields.next().unwrap_or_default().to_string();
    let reverse = parse_flag(fields.next());
    let raw = parse_flag(fields.next());
    let recursive = parse_flag(fields.next());
    let seed_field = fields.next();
    let rand_seed = seed_field.and_then(parse_seed).unwrap_or_else(|| {
        if seed_field.is_some_and(|f| !f.is_empty()) {
            tracing::debug!(input = %s, "Unparseable random seed, using 0");
        }
        0
    });

    let cfg = DisplayConfig {
        sort,
        reverse,
        raw,
        recursive,
        rand_seed,
    };
    if cfg.sort_key().is_none() {
        tracing::debug!(sort = %cfg.sort, "Decoded unknown sort key");
    }
    cfg
}

fn flag(value: bool) -> char {
    if value {
        '1'
    } else {
        '0'
    }
}

/// Only a literal `0` is false; anything else, missing included, is true
fn parse_flag(field: Option<&str>) -> bool {
    field != Some("0")
}

/// Leading decimal digits after optional whitespace and `+`.
///
/// Trailing garbage is ignored (`"42abc"` is 42). `None` when there are no
/// digits or the value does not fit in a `u64`. An overflowing run is
/// deliberately treated as unset, where the web client keeps a huge seed.
fn parse_seed(field: &str) -> Option<u64> {
    let trimmed = field.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }
    unsigned[..digits_len].parse().ok()
}

impl fmt::Display for DisplayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_config(self))
    }
}

impl From<&str> for DisplayConfig {
    fn from(s: &str) -> Self {
        decode_config(s)
    }
}
