//! Configuration constants.

/// Sentinel written into every geolocation field that has no looked-up value.
pub const UNKNOWN: &str = "Unknown";

/// Default location of the GeoLite2 City database, relative to the working directory.
pub const DEFAULT_CITY_DB_PATH: &str = "databases/GeoLite2-City.mmdb";

/// Default location of the GeoLite2 ASN database, relative to the working directory.
pub const DEFAULT_ASN_DB_PATH: &str = "databases/GeoLite2-ASN.mmdb";

/// Endpoint queried by the header fetcher. The caller-supplied URL is never requested.
pub const DEFAULT_HEADERS_TARGET: &str = "https://httpbin.org/get";

/// Raw query string that selects the environment probe (when the operator enables it).
pub const ENV_PROBE_QUERY: &str = "dfkt";

/// User-Agent sent as the single fixed request header.
///
/// Uses a generic Chrome-like string without a specific version number to avoid
/// becoming outdated.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Total per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
