//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration of the two tools.

use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_ASN_DB_PATH, DEFAULT_CITY_DB_PATH, DEFAULT_HEADERS_TARGET, DEFAULT_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the geolocation record is written to stdout.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented human-readable block
    Plain,
    /// A single JSON object
    Json,
}

/// Options for the `geolocate` binary.
///
/// # Examples
///
/// ```
/// use clap::Parser;
/// use ipgeo_tools::GeolocateConfig;
///
/// let config = GeolocateConfig::parse_from(["geolocate", "--ip_address", "8.8.8.8"]);
/// assert_eq!(config.ip_address, "8.8.8.8");
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "geolocate",
    about = "Look up an IP address in local MaxMind GeoLite2 databases"
)]
pub struct GeolocateConfig {
    /// IP Address to Check
    #[arg(long = "ip_address")]
    pub ip_address: String,

    /// Path to the GeoLite2 City database
    #[arg(long, env = "GEOIP_CITY_DB", default_value = DEFAULT_CITY_DB_PATH)]
    pub city_db: PathBuf,

    /// Path to the GeoLite2 ASN database
    #[arg(long, env = "GEOIP_ASN_DB", default_value = DEFAULT_ASN_DB_PATH)]
    pub asn_db: PathBuf,

    /// Output format for the result
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Options for the `fetch_headers` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fetch_headers",
    about = "Print the response headers returned by the configured endpoint"
)]
pub struct HeadersConfig {
    /// URL to inspect
    #[arg(long)]
    pub url: String,

    /// Endpoint that is actually requested
    #[arg(long, env = "HEADERS_TARGET_URL", default_value = DEFAULT_HEADERS_TARGET)]
    pub target: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Allow the `dfkt` query to return the process environment
    ///
    /// From the environment, `0`, `false`, `no`, `off` and empty mean disabled.
    #[arg(
        long,
        env = "HEADERS_ENABLE_ENV_PROBE",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub enable_env_probe: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}
