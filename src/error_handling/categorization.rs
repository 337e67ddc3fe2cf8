//! Transport error categorization.

use super::types::TransportFailureKind;

/// Maps a `reqwest::Error` onto a [`TransportFailureKind`].
///
/// Timeouts are checked before connect errors because a connect timeout reports both.
pub fn categorize_transport_error(error: &reqwest::Error) -> TransportFailureKind {
    if error.is_builder() {
        TransportFailureKind::Builder
    } else if error.is_redirect() {
        TransportFailureKind::Redirect
    } else if error.is_timeout() {
        TransportFailureKind::Timeout
    } else if error.is_connect() {
        TransportFailureKind::Connect
    } else if error.is_request() {
        TransportFailureKind::Request
    } else if error.is_body() {
        TransportFailureKind::Body
    } else if error.is_decode() {
        TransportFailureKind::Decode
    } else {
        TransportFailureKind::Other
    }
}
