//! Request types produced by the deep-link parser.

use serde::{Deserialize, Serialize};

/// Handler the link asks for. `Auto` is resolved by [`super::resolve_external_route_target`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkTarget {
    #[default]
    Auto,
    Youtube,
    Universal,
}

impl LinkTarget {
    /// `youtube` and `universal` map to themselves; anything else is `Auto`.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("youtube") => LinkTarget::Youtube,
            Some("universal") => LinkTarget::Universal,
            _ => LinkTarget::Auto,
        }
    }
}

/// Fully resolved download handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteTarget {
    Youtube,
    Universal,
}

impl RouteTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteTarget::Youtube => "youtube",
            RouteTarget::Universal => "universal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkAction {
    #[default]
    DownloadNow,
    QueueOnly,
}

impl LinkAction {
    /// Only the exact literal `queue_only` queues; everything else downloads.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("queue_only") => LinkAction::QueueOnly,
            _ => LinkAction::DownloadNow,
        }
    }
}

/// Video quality tokens accepted from a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VideoQuality {
    #[default]
    #[serde(rename = "best")]
    Best,
    #[serde(rename = "8k")]
    Uhd8k,
    #[serde(rename = "4k")]
    Uhd4k,
    #[serde(rename = "2k")]
    Qhd2k,
    #[serde(rename = "1080")]
    P1080,
    #[serde(rename = "720")]
    P720,
    #[serde(rename = "480")]
    P480,
    #[serde(rename = "360")]
    P360,
}

impl VideoQuality {
    pub const ALL: [VideoQuality; 8] = [
        VideoQuality::Best,
        VideoQuality::Uhd8k,
        VideoQuality::Uhd4k,
        VideoQuality::Qhd2k,
        VideoQuality::P1080,
        VideoQuality::P720,
        VideoQuality::P480,
        VideoQuality::P360,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VideoQuality::Best => "best",
            VideoQuality::Uhd8k => "8k",
            VideoQuality::Uhd4k => "4k",
            VideoQuality::Qhd2k => "2k",
            VideoQuality::P1080 => "1080",
            VideoQuality::P720 => "720",
            VideoQuality::P480 => "480",
            VideoQuality::P360 => "360",
        }
    }

    /// Exact, case-sensitive token match.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.as_str() == token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AudioBitrate {
    #[serde(rename = "128")]
    Kbps128,
    #[default]
    #[serde(rename = "auto")]
    Auto,
}

/// The single quality label carried by audio requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioQuality {
    #[default]
    Audio,
}

/// What to enqueue. `mediaType` discriminates the variant on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mediaType", rename_all = "lowercase")]
pub enum EnqueueOptions {
    #[serde(rename_all = "camelCase")]
    Audio {
        quality: AudioQuality,
        audio_bitrate: AudioBitrate,
    },
    Video { quality: VideoQuality },
}

impl EnqueueOptions {
    pub fn media_type(&self) -> &'static str {
        match self {
            EnqueueOptions::Audio { .. } => "audio",
            EnqueueOptions::Video { .. } => "video",
        }
    }
}

impl Default for EnqueueOptions {
    fn default() -> Self {
        EnqueueOptions::Video {
            quality: VideoQuality::Best,
        }
    }
}

/// A deep link that passed every check.
///
/// Only [`super::DeepLinkParser`] constructs these, so `url` is always a public
/// HTTP(S) URL. Consumers never re-validate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalLinkRequest {
    raw: String,
    url: String,
    target: LinkTarget,
    action: LinkAction,
    enqueue_options: EnqueueOptions,
    source: Option<String>,
}

impl ExternalLinkRequest {
    pub(super) fn new(
        raw: String,
        url: String,
        target: LinkTarget,
        action: LinkAction,
        enqueue_options: EnqueueOptions,
        source: Option<String>,
    ) -> Self {
        Self {
            raw,
            url,
            target,
            action,
            enqueue_options,
            source,
        }
    }

    /// Original link text. For logging only.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn target(&self) -> LinkTarget {
        self.target
    }

    pub fn action(&self) -> LinkAction {
        self.action
    }

    pub fn enqueue_options(&self) -> EnqueueOptions {
        self.enqueue_options
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}
