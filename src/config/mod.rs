//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (database paths, endpoint, timeouts)
//! - CLI option types and parsing for both binaries

mod constants;
mod types;

pub use constants::*;
pub use types::{GeolocateConfig, HeadersConfig, LogFormat, LogLevel, OutputFormat};
