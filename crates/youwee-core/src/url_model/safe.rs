//! Reject URLs carrying control characters, traversal, or script schemes.

use super::MAX_URL_LENGTH;

/// Encoded sequences that have no business in a download URL.
///
/// Compared against the lowercased string. Covers NUL/CR/LF/DEL and
/// dot-segment traversal in fully or partially encoded form.
const FORBIDDEN_SEQUENCES: &[&str] = &[
    "../", "..\\", "%2e%2e", ".%2e", "%2e.", "..%2f", "..%5c",
];

/// Schemes that execute or inline content instead of fetching it.
const FORBIDDEN_SCHEMES: &[&str] = &["javascript:", "data:", "vbscript:", "file:"];

/// Returns `true` when `url` passes the text-level safety screen.
pub fn is_safe_url(url: &str) -> bool {
    if url.trim().is_empty() || url.chars().count() > MAX_URL_LENGTH {
        return false;
    }
    if url
        .chars()
        .any(|c| c.is_control() || c.is_whitespace() || c == '\\')
    {
        return false;
    }

    let lower = url.to_ascii_lowercase();
    if FORBIDDEN_SCHEMES.iter().any(|s| lower.starts_with(s)) {
        return false;
    }
    if FORBIDDEN_SEQUENCES.iter().any(|s| lower.contains(s)) {
        return false;
    }
    !has_encoded_control_byte(&lower)
}

/// `%00`..`%1f` and `%7f`.
fn has_encoded_control_byte(lower: &str) -> bool {
    let bytes = lower.as_bytes();
    bytes.windows(3).any(|w| {
        if w[0] != b'%' {
            return false;
        }
        match (w[1], w[2]) {
            (b'0' | b'1', h) => h.is_ascii_hexdigit(),
            (b'7', b'f') => true,
            _ => false,
        }
    })
}
