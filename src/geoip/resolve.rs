//! Address validation and the resolve pipeline.

use std::net::IpAddr;

use super::lookup::{DatabasePaths, GeoLookup, MaxMindLookup};
use super::merge::{merge_asn, merge_city};
use super::types::GeoRecord;
use crate::error_handling::{LookupError, ResolveError};

/// Parses a textual IPv4 or IPv6 address.
///
/// Surrounding whitespace is rejected, as is anything `IpAddr` does not accept.
pub fn parse_ip(ip_address: &str) -> Result<IpAddr, ResolveError> {
    ip_address
        .parse::<IpAddr>()
        .map_err(|_| ResolveError::InvalidInput(ip_address.to_string()))
}

/// Resolves `ip_address` against the GeoLite2 files at `paths`.
///
/// # Errors
///
/// Only `ResolveError::InvalidInput`. Database problems are logged and leave
/// the affected fields at `"Unknown"`.
///
/// # Example
///
/// ```no_run
/// use ipgeo_tools::{resolve, DatabasePaths};
///
/// let record = resolve("8.8.8.8", &DatabasePaths::default()).unwrap();
/// println!("{}", record);
/// ```
pub fn resolve(ip_address: &str, paths: &DatabasePaths) -> Result<GeoRecord, ResolveError> {
    resolve_with(ip_address, &MaxMindLookup::new(paths.clone()))
}

/// Resolves `ip_address` using any [`GeoLookup`].
///
/// The City lookup and the ASN lookup are independent: a failure in one never
/// discards what the other found.
pub fn resolve_with<L>(ip_address: &str, lookup: &L) -> Result<GeoRecord, ResolveError>
where
    L: GeoLookup + ?Sized,
{
    let ip = parse_ip(ip_address)?;
    let mut record = GeoRecord::default();

    match lookup.city(ip) {
        Ok(fields) => merge_city(&mut record, fields),
        Err(e) => report(&e),
    }

    match lookup.asn(ip) {
        Ok(fields) => {
            if let Some(number) = fields.number {
                log::debug!("{} belongs to AS{}", ip, number);
            }
            merge_asn(&mut record, fields)
        }
        Err(e) => report(&e),
    }

    if record.is_unknown() {
        log::info!("No geolocation data found for {}", ip);
    }

    Ok(record)
}

fn report(error: &LookupError) {
    log::warn!("{}", error);
}
