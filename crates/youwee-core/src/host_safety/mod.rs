//! Host safety classification.
//!
//! Decides whether a host or URL points at a private, loopback, link-local,
//! or otherwise non-public network location. This is the only gate between
//! an attacker-supplied deep link and a URL the downloader is allowed to
//! fetch, so the rules are conservative: prefix matches are textual and
//! over-inclusive, and no DNS resolution is performed.

mod host;
mod public_url;

pub use host::is_private_or_local_host;
pub use public_url::{host_for_classification, is_public_http_url};
