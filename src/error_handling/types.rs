//! Error type definitions.
//!
//! This module defines the error types used by both tools.

use std::net::IpAddr;
use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// The only failure `resolve` surfaces to its caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The input is not a textual IPv4 or IPv6 address.
    #[error("Invalid IP address format: {0}")]
    InvalidInput(String),
}

/// Which GeoLite2 edition a lookup ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseKind {
    /// GeoLite2-City
    City,
    /// GeoLite2-ASN
    Asn,
}

impl DatabaseKind {
    /// MaxMind edition name, also the file stem of the database.
    pub fn edition(&self) -> &'static str {
        match self {
            DatabaseKind::City => "GeoLite2-City",
            DatabaseKind::Asn => "GeoLite2-ASN",
        }
    }
}

impl std::fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DatabaseKind::City => "City",
            DatabaseKind::Asn => "ASN",
        })
    }
}

/// Failure of a single database sub-lookup.
///
/// None of these escape `resolve`; they are logged and the affected fields keep
/// their sentinel value.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The database file does not exist.
    #[error("{} database file not found at {}. Please download it from MaxMind.", .database.edition(), .path.display())]
    ResourceUnavailable {
        /// Database that was being opened
        database: DatabaseKind,
        /// Path that was tried
        path: PathBuf,
    },

    /// The database has no record for the address.
    #[error("IP address {ip} not found in the {database} database")]
    NotFound {
        /// Database that was queried
        database: DatabaseKind,
        /// Address that was looked up
        ip: IpAddr,
    },

    /// The file exists but could not be parsed or queried, or the record could not be decoded.
    #[error("{} database could not be read: {source}", .database.edition())]
    Unreadable {
        /// Database that was being read
        database: DatabaseKind,
        /// Underlying reader error
        #[source]
        source: maxminddb::MaxMindDbError,
    },
}

impl LookupError {
    /// The database this failure belongs to.
    pub fn database(&self) -> DatabaseKind {
        match self {
            LookupError::ResourceUnavailable { database, .. }
            | LookupError::NotFound { database, .. }
            | LookupError::Unreadable { database, .. } => *database,
        }
    }
}

/// Errors returned by the header fetcher.
#[derive(Error, Debug)]
pub enum HeaderFetchError {
    /// The request to the target endpoint failed before a response arrived.
    #[error("Request to header endpoint failed: {0}")]
    Transport(#[from] ReqwestError),
}

/// Coarse category of a transport failure, used for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum TransportFailureKind {
    Builder,
    Redirect,
    Timeout,
    Connect,
    Request,
    Body,
    Decode,
    Other,
}

impl std::fmt::Display for TransportFailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TransportFailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportFailureKind::Builder => "HTTP request builder error",
            TransportFailureKind::Redirect => "HTTP request redirect error",
            TransportFailureKind::Timeout => "HTTP request timeout error",
            TransportFailureKind::Connect => "HTTP request connect error",
            TransportFailureKind::Request => "HTTP request error",
            TransportFailureKind::Body => "HTTP request body error",
            TransportFailureKind::Decode => "HTTP request decode error",
            TransportFailureKind::Other => "HTTP request other error",
        }
    }
}
