use clap::Args;
use std::fmt;
use std::str::FromStr;

use crate::constants;
use crate::error::Error;
use crate::url::UrlBuilder;

/// Where the data API lives, chosen at deploy time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServerUrl {
    /// `http://127.0.0.1:8080/api`, for local testing
    Local,
    /// `api`, relative to the current page (production)
    #[default]
    Relative,
    /// `/api`, relative to the site root
    Root,
    /// Any other base URL
    Custom(String),
}

impl ServerUrl {
    pub fn as_str(&self) -> &str {
        match self {
            ServerUrl::Local => constants::SERVER_URL_LOCAL,
            ServerUrl::Relative => constants::SERVER_URL_RELATIVE,
            ServerUrl::Root => constants::SERVER_URL_ROOT,
            ServerUrl::Custom(url) => url,
        }
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts a preset name (`local`, `relative`, `root`) or a literal base
/// URL. A trailing `/` on a literal URL is dropped, so `/` alone yields an
/// empty custom URL, which [`Config::validate`] rejects.
impl FromStr for ServerUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => Err(Error::EmptyServerUrl),
            "local" => Ok(ServerUrl::Local),
            "relative" => Ok(ServerUrl::Relative),
            "root" => Ok(ServerUrl::Root),
            url => Ok(ServerUrl::Custom(url.trim_end_matches('/').to_string())),
        }
    }
}

/// Process-wide settings, fixed at startup.
#[derive(Args, Debug, Clone)]
pub struct Config {
    /// Base URL of the data API
    ///
    /// Either a preset (local, relative, root) or a literal URL such as
    /// https://gallery.example.com/api
    #[arg(
        long,
        default_value = "relative",
        env = "GALLERYVIEW_SERVER_URL",
        value_name = "URL"
    )]
    pub server_url: ServerUrl,

    /// Seconds each item is shown during playback
    #[arg(
        long,
        default_value_t = constants::DEFAULT_PLAY_SECS,
        env = "GALLERYVIEW_PLAY_SECS",
        value_name = "SECS"
    )]
    pub play_secs: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: ServerUrl::default(),
            play_secs: constants::DEFAULT_PLAY_SECS,
        }
    }
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.play_secs == 0 {
            anyhow::bail!("Play duration must be at least one second");
        }

        if let ServerUrl::Custom(url) = &self.server_url {
            if url.is_empty() {
                anyhow::bail!("Server URL cannot be empty, use --server-url root for /api");
            }
            if url.contains(char::is_whitespace) {
                anyhow::bail!("Server URL cannot contain whitespace: {:?}", url);
            }
            if url.contains('?') {
                anyhow::bail!("Server URL cannot carry a query string: {:?}", url);
            }
        }

        Ok(())
    }

    pub fn url_builder(&self) -> UrlBuilder {
        UrlBuilder::from(self.server_url.clone())
    }
}
