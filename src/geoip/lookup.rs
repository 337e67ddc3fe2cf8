//! Database sub-lookups.
//!
//! [`GeoLookup`] is the seam between the resolver and the GeoLite2 files. The
//! MaxMind implementation opens each database for a single query and drops the
//! reader right after.

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use maxminddb::{geoip2, Reader};

use super::types::{AsnFields, CityFields};
use crate::config::{DEFAULT_ASN_DB_PATH, DEFAULT_CITY_DB_PATH};
use crate::error_handling::{DatabaseKind, LookupError};

/// A source of City and ASN records for an address.
pub trait GeoLookup {
    /// Looks `ip` up in the City database.
    fn city(&self, ip: IpAddr) -> Result<CityFields, LookupError>;

    /// Looks `ip` up in the ASN database.
    fn asn(&self, ip: IpAddr) -> Result<AsnFields, LookupError>;
}

/// Locations of the two GeoLite2 database files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabasePaths {
    pub city: PathBuf,
    pub asn: PathBuf,
}

impl Default for DatabasePaths {
    fn default() -> Self {
        Self {
            city: PathBuf::from(DEFAULT_CITY_DB_PATH),
            asn: PathBuf::from(DEFAULT_ASN_DB_PATH),
        }
    }
}

/// [`GeoLookup`] backed by local `.mmdb` files.
#[derive(Debug, Clone, Default)]
pub struct MaxMindLookup {
    paths: DatabasePaths,
}

impl MaxMindLookup {
    pub fn new(paths: DatabasePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &DatabasePaths {
        &self.paths
    }
}

impl GeoLookup for MaxMindLookup {
    fn city(&self, ip: IpAddr) -> Result<CityFields, LookupError> {
        let database = DatabaseKind::City;
        let reader = open_database(database, &self.paths.city)?;

        // maxminddb 0.27: lookup() returns a LookupResult; has_data() before decode()
        let lookup = reader
            .lookup(ip)
            .map_err(|source| LookupError::Unreadable { database, source })?;
        if !lookup.has_data() {
            return Err(LookupError::NotFound { database, ip });
        }

        let city: geoip2::City = match lookup.decode() {
            Ok(Some(city)) => city,
            Ok(None) => return Err(LookupError::NotFound { database, ip }),
            Err(source) => return Err(LookupError::Unreadable { database, source }),
        };

        Ok(CityFields {
            country_name: city.country.names.english.map(|s| s.to_string()),
            country_code: city.country.iso_code.map(|s| s.to_string()),
            city: city.city.names.english.map(|s| s.to_string()),
            latitude: city.location.latitude,
            longitude: city.location.longitude,
        })
    }

    fn asn(&self, ip: IpAddr) -> Result<AsnFields, LookupError> {
        let database = DatabaseKind::Asn;
        let reader = open_database(database, &self.paths.asn)?;

        let lookup = reader
            .lookup(ip)
            .map_err(|source| LookupError::Unreadable { database, source })?;
        if !lookup.has_data() {
            return Err(LookupError::NotFound { database, ip });
        }

        let asn: geoip2::Asn = match lookup.decode() {
            Ok(Some(asn)) => asn,
            Ok(None) => return Err(LookupError::NotFound { database, ip }),
            Err(source) => return Err(LookupError::Unreadable { database, source }),
        };

        Ok(AsnFields {
            organization: asn.autonomous_system_organization.map(|s| s.to_string()),
            number: asn.autonomous_system_number,
        })
    }
}

/// Opens a database file for one query.
fn open_database(database: DatabaseKind, path: &Path) -> Result<Reader<Vec<u8>>, LookupError> {
    if !path.exists() {
        return Err(LookupError::ResourceUnavailable {
            database,
            path: path.to_path_buf(),
        });
    }

    let reader = Reader::open_readfile(path)
        .map_err(|source| LookupError::Unreadable { database, source })?;
    log::debug!(
        "Opened {} database {} (type {}, build epoch {})",
        database,
        path.display(),
        reader.metadata.database_type,
        reader.metadata.build_epoch
    );
    Ok(reader)
}
