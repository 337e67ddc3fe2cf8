//! HTTP response header inspection.
//!
//! The fetcher always requests a fixed endpoint; the caller's URL only decides
//! whether the operator-enabled env probe answers instead.

mod fetch;
mod types;

pub use fetch::{fetch_headers, HeaderSettings};
pub use types::{HeaderMap, HeaderSource};

/// Formats headers one `name: value` pair per line, in iteration order.
pub fn render(headers: &HeaderMap) -> String {
    headers.to_string()
}
