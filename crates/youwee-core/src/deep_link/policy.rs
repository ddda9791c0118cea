//! Allow-sets consulted by the deep-link parser.

use super::types::VideoQuality;

/// Hosts routed to the YouTube handler and eligible for playlist stripping.
pub const DEFAULT_VIDEO_HOSTS: &[&str] = &[
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "music.youtube.com",
    "youtu.be",
    "www.youtu.be",
];

/// Short-link hosts that carry the video id as the first path segment.
pub const DEFAULT_SHORT_LINK_HOSTS: &[&str] = &["youtu.be", "www.youtu.be"];

/// Playlist companion parameters removed from single-item links.
pub const DEFAULT_STRIPPED_PARAMS: &[&str] = &["list", "index", "start_radio"];

/// Integrations allowed to tag the links they produce.
pub const DEFAULT_TRUSTED_SOURCES: &[&str] = &["browser-extension"];

/// Immutable allow-sets for one parser instance.
///
/// Hosts are stored lowercased; trusted sources keep their canonical spelling
/// and are matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPolicy {
    video_hosts: Vec<String>,
    short_link_hosts: Vec<String>,
    stripped_params: Vec<String>,
    trusted_sources: Vec<String>,
    video_qualities: Vec<VideoQuality>,
}

impl Default for LinkPolicy {
    fn default() -> Self {
        Self {
            video_hosts: to_lower_vec(DEFAULT_VIDEO_HOSTS),
            short_link_hosts: to_lower_vec(DEFAULT_SHORT_LINK_HOSTS),
            stripped_params: DEFAULT_STRIPPED_PARAMS.iter().map(|s| s.to_string()).collect(),
            trusted_sources: DEFAULT_TRUSTED_SOURCES.iter().map(|s| s.to_string()).collect(),
            video_qualities: VideoQuality::ALL.to_vec(),
        }
    }
}

impl LinkPolicy {
    pub fn with_video_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.video_hosts = hosts
            .into_iter()
            .map(|h| h.as_ref().trim().to_ascii_lowercase())
            .filter(|h| !h.is_empty())
            .collect();
        self
    }

    pub fn with_short_link_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.short_link_hosts = hosts
            .into_iter()
            .map(|h| h.as_ref().trim().to_ascii_lowercase())
            .filter(|h| !h.is_empty())
            .collect();
        self
    }

    pub fn with_trusted_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.trusted_sources = sources
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        self
    }

    /// Restrict the accepted video qualities. `best` is always accepted since
    /// it is the fallback.
    pub fn with_video_qualities<I>(mut self, qualities: I) -> Self
    where
        I: IntoIterator<Item = VideoQuality>,
    {
        self.video_qualities = qualities.into_iter().collect();
        if !self.video_qualities.contains(&VideoQuality::Best) {
            self.video_qualities.push(VideoQuality::Best);
        }
        self
    }

    pub fn is_video_host(&self, host: &str) -> bool {
        let host = host.to_ascii_lowercase();
        self.video_hosts.iter().any(|h| *h == host)
    }

    pub fn is_short_link_host(&self, host: &str) -> bool {
        let host = host.to_ascii_lowercase();
        self.short_link_hosts.iter().any(|h| *h == host)
    }

    pub fn is_stripped_param(&self, name: &str) -> bool {
        self.stripped_params.iter().any(|p| p == name)
    }

    /// Canonical allow-set spelling of `tag`, if it is trusted.
    pub fn trusted_source(&self, tag: &str) -> Option<&str> {
        let tag = tag.trim();
        if tag.is_empty() {
            return None;
        }
        self.trusted_sources
            .iter()
            .find(|s| s.eq_ignore_ascii_case(tag))
            .map(String::as_str)
    }

    /// Parsed quality if the token is known and allowed, otherwise `best`.
    pub fn video_quality(&self, token: Option<&str>) -> VideoQuality {
        token
            .and_then(VideoQuality::from_token)
            .filter(|q| self.video_qualities.contains(q))
            .unwrap_or(VideoQuality::Best)
    }
}

fn to_lower_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_ascii_lowercase()).collect()
}
