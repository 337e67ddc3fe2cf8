//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, geolocation, and header fetching
//! - Categorization of transport failures for log output
//!
//! Geolocation lookup failures are contained at the sub-lookup boundary and only
//! ever logged. Header fetch failures propagate to the caller.

mod categorization;
mod types;

pub use categorization::categorize_transport_error;
pub use types::{
    DatabaseKind, HeaderFetchError, InitializationError, LookupError, ResolveError,
    TransportFailureKind,
};
