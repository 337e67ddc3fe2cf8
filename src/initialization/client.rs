//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::TCP_CONNECT_TIMEOUT_SECS;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used by the header fetcher.
///
/// Creates a `reqwest::Client` configured with:
/// - A total timeout of `timeout_seconds`
/// - A connect timeout of [`TCP_CONNECT_TIMEOUT_SECS`], capped by the total timeout
///
/// The fixed User-Agent is attached per request, not here.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(timeout_seconds: u64) -> Result<reqwest::Client, InitializationError> {
    let connect_timeout = TCP_CONNECT_TIMEOUT_SECS.min(timeout_seconds);
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_seconds))
        .connect_timeout(Duration::from_secs(connect_timeout))
        .build()?;
    Ok(client)
}
