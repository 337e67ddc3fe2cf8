//! Header collection types.

use std::fmt;

use serde::Serialize;

/// Where the entries of a [`HeaderMap`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderSource {
    /// Response headers from the target endpoint
    #[default]
    Response,
    /// The process environment (env probe)
    Environment,
}

/// Ordered list of name/value pairs.
///
/// Entries keep the order of the transport or environment they came from.
/// Repeated names are kept as separate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderMap {
    source: HeaderSource,
    entries: Vec<(String, String)>,
}

impl HeaderMap {
    pub fn new(source: HeaderSource) -> Self {
        Self {
            source,
            entries: Vec::new(),
        }
    }

    /// Copies response headers, decoding non-UTF-8 values lossily.
    pub fn from_response(headers: &reqwest::header::HeaderMap) -> Self {
        let mut map = Self::new(HeaderSource::Response);
        for (name, value) in headers {
            map.push(
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }
        map
    }

    /// Snapshot of the current process environment.
    pub fn from_env() -> Self {
        let mut map = Self::new(HeaderSource::Environment);
        for (key, value) in std::env::vars_os() {
            map.push(
                key.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            );
        }
        map
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn source(&self) -> HeaderSource {
        self.source
    }

    /// First value for `name`, compared case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for HeaderMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.entries
            .iter()
            .try_for_each(|(name, value)| writeln!(f, "{}: {}", name, value))
    }
}
