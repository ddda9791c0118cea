//! Public HTTP(S) URL gate built on the host predicate.

use url::{Host, Url};

use super::host::is_private_or_local_host;

/// Returns `true` only for parseable `http`/`https` URLs whose host is public.
pub fn is_public_http_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }
    match host_for_classification(&parsed) {
        Some(host) => !is_private_or_local_host(&host),
        None => false,
    }
}

/// Host of a parsed URL in the form the classifier expects: canonical dotted
/// IPv4, compressed IPv6 without brackets, or the (lowercased) domain.
pub fn host_for_classification(url: &Url) -> Option<String> {
    match url.host()? {
        Host::Domain(domain) => Some(domain.to_ascii_lowercase()),
        Host::Ipv4(addr) => Some(addr.to_string()),
        Host::Ipv6(addr) => Some(addr.to_string()),
    }
}
