//! `youwee://download` link parser.

use url::Url;

use super::error::LinkRejection;
use super::normalize::normalize_external_video_url;
use super::policy::LinkPolicy;
use super::route::resolve_route_target;
use super::types::{
    AudioBitrate, AudioQuality, EnqueueOptions, ExternalLinkRequest, LinkAction, LinkTarget,
    RouteTarget,
};
use crate::host_safety::is_public_http_url;
use crate::url_model::{is_safe_url, MAX_URL_LENGTH};

pub const DEEP_LINK_SCHEME: &str = "youwee";
pub const DEEP_LINK_HOST: &str = "download";
pub const DEEP_LINK_VERSION: &str = "1";

/// Parses deep links against one immutable [`LinkPolicy`].
#[derive(Debug, Clone, Default)]
pub struct DeepLinkParser {
    policy: LinkPolicy,
}

impl DeepLinkParser {
    pub fn new(policy: LinkPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &LinkPolicy {
        &self.policy
    }

    /// Validates `raw` and builds a request, or returns `None`.
    ///
    /// `None` means "ignore silently". The reason is only logged.
    pub fn parse(&self, raw: &str) -> Option<ExternalLinkRequest> {
        match self.try_parse(raw) {
            Ok(request) => {
                tracing::debug!(url = %request.url(), "accepted deep link");
                Some(request)
            }
            Err(reason) => {
                tracing::debug!(%reason, "ignored deep link");
                None
            }
        }
    }

    /// Handler for a parsed request, honoring explicit targets.
    pub fn route(&self, request: &ExternalLinkRequest) -> RouteTarget {
        resolve_route_target(request.target(), request.url(), &self.policy)
    }

    fn try_parse(&self, raw: &str) -> Result<ExternalLinkRequest, LinkRejection> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.chars().count() > MAX_URL_LENGTH {
            return Err(LinkRejection::Length);
        }

        let link = Url::parse(trimmed).map_err(|_| LinkRejection::Unparseable)?;
        if link.scheme() != DEEP_LINK_SCHEME || link.host_str() != Some(DEEP_LINK_HOST) {
            return Err(LinkRejection::Shape);
        }
        if first_param(&link, "v").as_deref() != Some(DEEP_LINK_VERSION) {
            return Err(LinkRejection::Version);
        }

        let candidate = first_param(&link, "url")
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or(LinkRejection::MissingUrl)?;
        if !is_safe_url(&candidate) {
            return Err(LinkRejection::UnsafeText);
        }

        let url = normalize_external_video_url(&candidate, &self.policy);
        if !is_safe_url(&url) {
            return Err(LinkRejection::UnsafeText);
        }
        if !is_public_http_url(&url) {
            return Err(LinkRejection::NotPublic);
        }

        let target = LinkTarget::from_param(first_param(&link, "target").as_deref());
        let action = LinkAction::from_param(first_param(&link, "action").as_deref());
        let enqueue_options = self.enqueue_options(&link);
        let source = first_param(&link, "source")
            .and_then(|tag| self.policy.trusted_source(&tag).map(str::to_string));

        Ok(ExternalLinkRequest::new(
            trimmed.to_string(),
            url,
            target,
            action,
            enqueue_options,
            source,
        ))
    }

    fn enqueue_options(&self, link: &Url) -> EnqueueOptions {
        let quality = first_param(link, "quality");
        if first_param(link, "media").as_deref() == Some("audio") {
            let audio_bitrate = match quality.as_deref() {
                Some("128") => AudioBitrate::Kbps128,
                _ => AudioBitrate::Auto,
            };
            return EnqueueOptions::Audio {
                quality: AudioQuality::Audio,
                audio_bitrate,
            };
        }
        EnqueueOptions::Video {
            quality: self.policy.video_quality(quality.as_deref()),
        }
    }
}

/// First occurrence of a query parameter, percent-decoded.
fn first_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Parses with the built-in [`LinkPolicy`].
pub fn parse_external_deep_link(raw: &str) -> Option<ExternalLinkRequest> {
    DeepLinkParser::default().parse(raw)
}

#[cfg(test)]
mod tests;
