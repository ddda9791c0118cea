//! Deep-link parsing and routing.
//!
//! Turns an untrusted `youwee://download?...` string into an
//! [`ExternalLinkRequest`] whose target URL is guaranteed to be a public
//! HTTP(S) URL, then picks the download handler for it. Every failure
//! collapses to `None` so callers can ignore rejected links silently.

mod argv;
mod error;
mod inbox;
mod normalize;
mod parse;
mod policy;
mod route;
mod types;

pub use argv::{extract_external_links_from_argv, is_valid_external_link};
pub use inbox::{PendingLinks, MAX_PENDING_EXTERNAL_LINKS};
pub use normalize::normalize_external_video_url;
pub use parse::{
    parse_external_deep_link, DeepLinkParser, DEEP_LINK_HOST, DEEP_LINK_SCHEME,
    DEEP_LINK_VERSION,
};
pub use policy::{
    LinkPolicy, DEFAULT_SHORT_LINK_HOSTS, DEFAULT_STRIPPED_PARAMS, DEFAULT_TRUSTED_SOURCES,
    DEFAULT_VIDEO_HOSTS,
};
pub use route::{resolve_external_route_target, resolve_route_target};
pub use types::{
    AudioBitrate, AudioQuality, EnqueueOptions, ExternalLinkRequest, LinkAction, LinkTarget,
    RouteTarget, VideoQuality,
};
