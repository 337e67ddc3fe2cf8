//! Header fetching.

use reqwest::header::USER_AGENT;
use url::Url;

use super::types::HeaderMap;
use crate::config::{DEFAULT_HEADERS_TARGET, DEFAULT_USER_AGENT, ENV_PROBE_QUERY};
use crate::error_handling::{categorize_transport_error, HeaderFetchError};

/// Settings for [`fetch_headers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSettings {
    /// Endpoint that is requested; the caller's URL is only inspected.
    pub target: String,
    /// Whether the `dfkt` query may return the process environment.
    pub env_probe: bool,
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            target: DEFAULT_HEADERS_TARGET.to_string(),
            env_probe: false,
        }
    }
}

/// Returns the headers for `url`.
///
/// `url` is only inspected for its query and never requested, so any string is
/// accepted. When the raw query is exactly `dfkt` and `settings.env_probe` is
/// set, the process environment is returned and no request is made. Otherwise
/// one GET goes to `settings.target` with a fixed User-Agent, and its response
/// headers are returned whatever the status.
///
/// # Errors
///
/// Returns `HeaderFetchError::Transport` if the request fails before a response
/// arrives.
pub async fn fetch_headers(
    url: &str,
    client: &reqwest::Client,
    settings: &HeaderSettings,
) -> Result<HeaderMap, HeaderFetchError> {
    if raw_query(url).as_deref() == Some(ENV_PROBE_QUERY) {
        if settings.env_probe {
            log::warn!("Env probe requested by {}; returning process environment", url);
            return Ok(HeaderMap::from_env());
        }
        log::warn!("Ignoring env probe query on {}: probe is disabled", url);
    }

    log::debug!("Requesting {} on behalf of {}", settings.target, url);
    let response = client
        .get(&settings.target)
        .header(USER_AGENT, DEFAULT_USER_AGENT)
        .send()
        .await
        .map_err(|e| {
            log::error!("{} for {}: {}", categorize_transport_error(&e), settings.target, e);
            HeaderFetchError::Transport(e)
        })?;

    log::info!(
        "{} responded with {} ({} headers)",
        settings.target,
        response.status(),
        response.headers().len()
    );
    Ok(HeaderMap::from_response(response.headers()))
}

/// Raw query of `url`, or `None` when it has none.
///
/// Absolute URLs go through `Url`. Anything else, such as `host/path?dfkt`,
/// falls back to the text between the first `?` and any `#`.
fn raw_query(url: &str) -> Option<String> {
    if let Ok(parsed) = Url::parse(url) {
        return parsed.query().map(str::to_owned);
    }
    let (_, rest) = url.split_once('?')?;
    let query = rest.split_once('#').map_or(rest, |(query, _)| query);
    Some(query.to_string())
}
