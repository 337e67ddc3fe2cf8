//! ipgeo_tools library: IP geolocation and HTTP header inspection
//!
//! Two independent, single-shot tools share this crate:
//!
//! - **geolocate** resolves one IP address against local MaxMind GeoLite2 City
//!   and ASN databases and merges both lookups into a [`GeoRecord`].
//! - **fetch_headers** requests a fixed endpoint and returns its response
//!   headers as a [`HeaderMap`].
//!
//! # Example
//!
//! ```no_run
//! use ipgeo_tools::{resolve, DatabasePaths};
//!
//! let record = resolve("1.1.1.1", &DatabasePaths::default())?;
//! println!("{}", record);
//! # Ok::<(), ipgeo_tools::ResolveError>(())
//! ```
//!
//! # Requirements
//!
//! [`fetch_headers`] is async and needs a Tokio runtime. The geolocation path is
//! synchronous.

pub mod config;
pub mod error_handling;
pub mod geoip;
pub mod headers;
pub mod initialization;

// Re-export public API
pub use config::{GeolocateConfig, HeadersConfig, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{DatabaseKind, HeaderFetchError, LookupError, ResolveError};
pub use geoip::{resolve, resolve_with, DatabasePaths, GeoLookup, GeoRecord, MaxMindLookup};
pub use headers::{fetch_headers, HeaderMap, HeaderSettings, HeaderSource};
