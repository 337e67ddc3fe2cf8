//! Per-field merging of sub-lookup results into a [`GeoRecord`].
//!
//! A field is overwritten only when the lookup produced a usable value; anything
//! else leaves the current value (normally the sentinel) in place.

use super::types::{AsnFields, CityFields, GeoRecord};

/// Overwrites the city-derived fields of `record` with the present values in `fields`.
pub fn merge_city(record: &mut GeoRecord, fields: CityFields) {
    overwrite_text(&mut record.country_name, fields.country_name);
    overwrite_text(&mut record.country_code, fields.country_code);
    overwrite_text(&mut record.city, fields.city);
    overwrite_coordinate(&mut record.latitude, fields.latitude);
    overwrite_coordinate(&mut record.longitude, fields.longitude);
}

/// Sets `record.isp` from the ASN organization if one is present.
pub fn merge_asn(record: &mut GeoRecord, fields: AsnFields) {
    overwrite_text(&mut record.isp, fields.organization);
}

fn overwrite_text(slot: &mut String, value: Option<String>) {
    match value {
        Some(value) if !value.trim().is_empty() => *slot = value,
        _ => {}
    }
}

fn overwrite_coordinate(slot: &mut String, value: Option<f64>) {
    if let Some(value) = value.filter(|v| v.is_finite()) {
        *slot = format_coordinate(value);
    }
}

/// Renders a coordinate with at least one decimal place (`-122.0`, `37.751`).
pub(crate) fn format_coordinate(value: f64) -> String {
    format!("{:?}", value)
}
