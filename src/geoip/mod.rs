//! GeoIP lookup using MaxMind GeoLite2 databases.
//!
//! Resolves one address against the City and ASN databases and merges both
//! results into a [`GeoRecord`]. Missing databases, unknown addresses, and
//! unreadable files degrade to the `"Unknown"` sentinel instead of failing.

mod lookup;
mod merge;
mod resolve;
mod types;

pub use lookup::{DatabasePaths, GeoLookup, MaxMindLookup};
pub use merge::{merge_asn, merge_city};
pub use resolve::{parse_ip, resolve, resolve_with};
pub use types::{AsnFields, CityFields, GeoRecord};

use crate::error_handling::ResolveError;

/// Formats a record as the fixed-order block printed by the `geolocate` tool.
pub fn render(record: &GeoRecord) -> String {
    record.to_string()
}

/// Formats a record as a single-line JSON object.
pub fn render_json(record: &GeoRecord) -> serde_json::Result<String> {
    serde_json::to_string(record)
}

/// Formats a resolve failure as a single-line JSON object for `--format json`.
pub fn render_error_json(error: &ResolveError) -> String {
    match error {
        ResolveError::InvalidInput(ip) => serde_json::json!({
            "error": "invalid_input",
            "message": error.to_string(),
            "ip_address": ip,
        })
        .to_string(),
    }
}
