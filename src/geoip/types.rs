//! GeoIP data structures.

use std::fmt;

use serde::Serialize;

use crate::config::UNKNOWN;

/// Merged result of the City and ASN lookups.
///
/// Every field holds either a looked-up value or the `"Unknown"` sentinel, never
/// an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeoRecord {
    pub country_name: String,
    pub country_code: String,
    pub city: String,
    pub latitude: String,
    pub longitude: String,
    pub isp: String,
}

impl Default for GeoRecord {
    fn default() -> Self {
        Self {
            country_name: UNKNOWN.to_string(),
            country_code: UNKNOWN.to_string(),
            city: UNKNOWN.to_string(),
            latitude: UNKNOWN.to_string(),
            longitude: UNKNOWN.to_string(),
            isp: UNKNOWN.to_string(),
        }
    }
}

impl GeoRecord {
    /// True when no sub-lookup contributed anything.
    pub fn is_unknown(&self) -> bool {
        *self == GeoRecord::default()
    }
}

impl fmt::Display for GeoRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "[*] Geolocation Information:")?;
        writeln!(
            f,
            "    Country: {} ({})",
            self.country_name, self.country_code
        )?;
        writeln!(f, "    City: {}", self.city)?;
        writeln!(f, "    Latitude: {}", self.latitude)?;
        writeln!(f, "    Longitude: {}", self.longitude)?;
        writeln!(f, "    ISP: {}", self.isp)
    }
}

/// Values read from the City database. `None` means the record had no value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityFields {
    pub country_name: Option<String>,
    pub country_code: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Values read from the ASN database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AsnFields {
    pub organization: Option<String>,
    pub number: Option<u32>,
}
