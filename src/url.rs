use ::url::form_urlencoded;

use crate::config::ServerUrl;
use crate::error::{Error, Result};

/// Query parameter holding the directory path
pub const DIR_PARAM: &str = "dir";

/// Query parameters in insertion order.
///
/// Setting an existing key replaces its value in place, keeping its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Params with just `dir` set
    pub fn with_dir(dir: impl Into<String>) -> Self {
        let mut params = Self::new();
        params.set(DIR_PARAM, dir);
        params
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// A copy with an empty `dir` rewritten to `/`, so the root directory
    /// still shows up in the query string
    pub fn normalized(&self) -> Self {
        let mut params = self.clone();
        if params.get(DIR_PARAM) == Some("") {
            params.set(DIR_PARAM, "/");
        }
        params
    }

    /// Form-urlencoded query string, without the leading `?`
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

/// Split a `key=value` argument. The value may be empty, the key may not.
pub fn parse_pair(s: &str) -> Result<(String, String)> {
    s.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| Error::InvalidParam(s.to_string()))
}

/// Builds URLs for the data API and for the UI's own address bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base_url: String,
}

impl UrlBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base>/<path>?<params>`, with an empty `dir` sent as `/`
    pub fn api_url(&self, path: &str, params: &QueryParams) -> String {
        let url = format!("{}/{}?{}", self.base_url, path, params.normalized().encode());
        tracing::trace!(url = %url, "Built API url");
        url
    }

    /// `?<params>` for the current page's shareable state
    pub fn ui_url(&self, params: &QueryParams) -> String {
        ui_url(params)
    }
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self::from(ServerUrl::default())
    }
}

impl From<ServerUrl> for UrlBuilder {
    fn from(server_url: ServerUrl) -> Self {
        Self::new(server_url.as_str())
    }
}

/// `?<params>`, independent of any base URL
pub fn ui_url(params: &QueryParams) -> String {
    format!("?{}", params.encode())
}

pub fn trim_prefix<'a>(s: &'a str, prefix: &str) -> &'a str {
    s.strip_prefix(prefix).unwrap_or(s)
}
