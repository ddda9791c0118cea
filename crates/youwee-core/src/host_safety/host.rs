//! Private/local hostname and IP-literal predicate.

/// Exact hostnames that always resolve to the local machine or "any" address.
const LOCAL_HOSTS: &[&str] = &["localhost", "0.0.0.0", "::", "::1"];

/// Reserved suffixes for names that never leave the local network.
const LOCAL_SUFFIXES: &[&str] = &[".localhost", ".local", ".internal"];

/// IPv4 prefixes for loopback, RFC 1918 (10/8, 192.168/16), and link-local.
/// 172.16/12 is handled separately because its second octet is a range.
const PRIVATE_V4_PREFIXES: &[&str] = &["127.", "10.", "192.168.", "169.254."];

/// Returns `true` when `hostname` must not be fetched.
///
/// Input is a bare host as extracted from a parsed URL. IPv6 brackets are
/// tolerated and stripped. Matching is textual: any host that merely starts
/// with a private IPv4 prefix is rejected, even if it is not a valid literal.
pub fn is_private_or_local_host(hostname: &str) -> bool {
    let host = normalize(hostname);
    if host.is_empty() {
        return true;
    }

    if LOCAL_HOSTS.contains(&host.as_str())
        || LOCAL_SUFFIXES.iter().any(|suffix| host.ends_with(suffix))
    {
        return true;
    }

    if PRIVATE_V4_PREFIXES
        .iter()
        .any(|prefix| host.starts_with(prefix))
        || is_private_172(&host)
    {
        return true;
    }

    if host.contains(':') {
        return host.starts_with("fe80:") || host.starts_with("fc") || host.starts_with("fd");
    }

    false
}

fn normalize(hostname: &str) -> String {
    let trimmed = hostname.trim();
    let unbracketed = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);
    let without_root = unbracketed.strip_suffix('.').unwrap_or(unbracketed);
    without_root.to_ascii_lowercase()
}

/// 172.16.0.0/12: second octet 16..=31.
fn is_private_172(host: &str) -> bool {
    let Some(rest) = host.strip_prefix("172.") else {
        return false;
    };
    let Some((octet, _)) = rest.split_once('.') else {
        return false;
    };
    matches!(octet.parse::<u16>(), Ok(16..=31))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_loopback_private_and_link_local() {
        for host in [
            "127.0.0.1",
            "10.0.0.1",
            "192.168.1.1",
            "169.254.1.1",
            "172.16.0.1",
            "172.31.255.255",
            "localhost",
            "foo.local",
            "::1",
            "fe80::1",
        ] {
            assert!(is_private_or_local_host(host), "{host} should be private");
        }
    }

    #[test]
    fn allows_public_hosts() {
        for host in ["example.com", "8.8.8.8", "youtube.com", "172.32.0.1", "172.15.0.1"] {
            assert!(!is_private_or_local_host(host), "{host} should be public");
        }
    }

    #[test]
    fn empty_and_unspecified_are_rejected() {
        assert!(is_private_or_local_host(""));
        assert!(is_private_or_local_host("   "));
        assert!(is_private_or_local_host("0.0.0.0"));
        assert!(is_private_or_local_host("::"));
    }

    #[test]
    fn reserved_suffixes() {
        assert!(is_private_or_local_host("app.localhost"));
        assert!(is_private_or_local_host("db.internal"));
        assert!(is_private_or_local_host("Printer.LOCAL"));
        assert!(!is_private_or_local_host("local.example.com"));
    }

    #[test]
    fn brackets_and_root_dot_are_stripped() {
        assert!(is_private_or_local_host("[::1]"));
        assert!(is_private_or_local_host("localhost."));
    }

    #[test]
    fn unique_local_ipv6() {
        assert!(is_private_or_local_host("fc00::1"));
        assert!(is_private_or_local_host("fd12:3456::1"));
        assert!(!is_private_or_local_host("2001:4860:4860::8888"));
    }

    #[test]
    fn ipv6_rules_do_not_apply_to_domains() {
        assert!(!is_private_or_local_host("fdroid.org"));
        assert!(!is_private_or_local_host("fcbarcelona.com"));
    }

    #[test]
    fn prefix_match_is_over_inclusive() {
        // Not a valid literal, still rejected by prefix.
        assert!(is_private_or_local_host("10.example.com"));
        assert!(is_private_or_local_host("127.0.0.1.nip.io"));
    }
}
