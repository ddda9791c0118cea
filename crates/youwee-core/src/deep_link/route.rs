//! Route resolution: explicit link intent first, host sniffing second.

use url::Url;

use super::policy::LinkPolicy;
use super::types::{LinkTarget, RouteTarget};

/// Resolves the handler for a validated URL.
///
/// An explicit `youtube`/`universal` target is honored even when the URL
/// looks like the other platform. `auto` routes recognized video hosts to
/// `youtube` and everything else (including unparseable URLs) to `universal`.
pub fn resolve_route_target(preferred: LinkTarget, url: &str, policy: &LinkPolicy) -> RouteTarget {
    match preferred {
        LinkTarget::Youtube => RouteTarget::Youtube,
        LinkTarget::Universal => RouteTarget::Universal,
        LinkTarget::Auto => {
            let is_video_host = Url::parse(url)
                .ok()
                .and_then(|u| u.host_str().map(|h| policy.is_video_host(h)))
                .unwrap_or(false);
            if is_video_host {
                RouteTarget::Youtube
            } else {
                RouteTarget::Universal
            }
        }
    }
}

/// [`resolve_route_target`] with the built-in host set.
pub fn resolve_external_route_target(preferred: LinkTarget, url: &str) -> RouteTarget {
    resolve_route_target(preferred, url, &LinkPolicy::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_target_wins() {
        assert_eq!(
            resolve_external_route_target(LinkTarget::Universal, "https://www.youtube.com/watch?v=a"),
            RouteTarget::Universal
        );
        assert_eq!(
            resolve_external_route_target(LinkTarget::Youtube, "https://vimeo.com/1"),
            RouteTarget::Youtube
        );
    }

    #[test]
    fn auto_sniffs_host() {
        assert_eq!(
            resolve_external_route_target(LinkTarget::Auto, "https://youtu.be/abc"),
            RouteTarget::Youtube
        );
        assert_eq!(
            resolve_external_route_target(LinkTarget::Auto, "https://M.YouTube.com/watch?v=a"),
            RouteTarget::Youtube
        );
        assert_eq!(
            resolve_external_route_target(LinkTarget::Auto, "https://vimeo.com/1"),
            RouteTarget::Universal
        );
        assert_eq!(
            resolve_external_route_target(LinkTarget::Auto, "garbage"),
            RouteTarget::Universal
        );
    }

    #[test]
    fn lookalike_hosts_are_universal() {
        assert_eq!(
            resolve_external_route_target(LinkTarget::Auto, "https://youtube.com.evil.net/watch?v=a"),
            RouteTarget::Universal
        );
    }
}
