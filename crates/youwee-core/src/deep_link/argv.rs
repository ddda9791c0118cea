//! Deep links delivered through process arguments.
//!
//! On Windows and Linux the OS launches (or re-launches) the app with the
//! link somewhere in argv, sometimes quoted or glued to other text. These
//! helpers only do a cheap shape check; full validation is the parser's job.

use super::parse::{DEEP_LINK_HOST, DEEP_LINK_SCHEME};
use crate::url_model::MAX_URL_LENGTH;

const QUOTES: &[char] = &['"', '\''];

fn link_prefix() -> String {
    format!("{DEEP_LINK_SCHEME}://")
}

/// Cheap shape check: non-empty, bounded, `youwee://download`, carries
/// `v=1` and `url=` somewhere.
pub fn is_valid_external_link(link: &str) -> bool {
    let trimmed = link.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_URL_LENGTH {
        return false;
    }
    if !trimmed.starts_with(&format!("{DEEP_LINK_SCHEME}://{DEEP_LINK_HOST}")) {
        return false;
    }
    trimmed.contains("v=1") && trimmed.contains("url=")
}

fn extract_from_arg(arg: &str) -> Option<String> {
    let trimmed = arg.trim().trim_matches(QUOTES);
    let prefix = link_prefix();
    let candidate = if trimmed.starts_with(&prefix) {
        trimmed
    } else {
        let start = trimmed.find(&prefix)?;
        trimmed[start..].trim_matches(QUOTES)
    };
    is_valid_external_link(candidate).then(|| candidate.to_string())
}

/// Links found in `argv`, in order, without duplicates.
pub fn extract_external_links_from_argv<S: AsRef<str>>(argv: &[S]) -> Vec<String> {
    let mut links: Vec<String> = Vec::new();
    for arg in argv {
        if let Some(link) = extract_from_arg(arg.as_ref()) {
            if !links.contains(&link) {
                links.push(link);
            }
        }
    }
    links
}
