//! Parser tests: link shape, target safety, and option fallbacks.

use super::*;
use crate::deep_link::types::VideoQuality;

fn parse(raw: &str) -> Option<ExternalLinkRequest> {
    parse_external_deep_link(raw)
}

fn link(url: &str, extra: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(url.as_bytes()).collect();
    format!("youwee://download?v=1&url={encoded}{extra}")
}

#[test]
fn minimal_youtube_link_uses_defaults() {
    let req = parse("youwee://download?v=1&url=https://youtube.com/watch?v=abc123")
        .expect("link should be accepted");
    assert_eq!(req.target(), LinkTarget::Auto);
    assert_eq!(req.action(), LinkAction::DownloadNow);
    assert_eq!(
        req.enqueue_options(),
        EnqueueOptions::Video {
            quality: VideoQuality::Best
        }
    );
    assert!(req.url().contains("v=abc123"));
    assert!(!req.url().contains("list="));
    assert!(!req.url().contains("index="));
    assert_eq!(req.source(), None);
}

#[test]
fn playlist_params_are_stripped_from_encoded_target() {
    let raw = link("https://www.youtube.com/watch?v=abc123&list=PL9&index=3", "");
    let req = parse(&raw).unwrap();
    assert_eq!(req.url(), "https://www.youtube.com/watch?v=abc123");
    assert_eq!(req.raw(), raw);
}

#[test]
fn private_targets_are_rejected() {
    assert!(parse("youwee://download?v=1&url=http://192.168.1.5/video.mp4").is_none());
    assert!(parse(&link("http://localhost:3000/x", "")).is_none());
    assert!(parse(&link("http://[::1]/x", "")).is_none());
    assert!(parse(&link("http://127.1/x", "")).is_none());
    assert!(parse(&link("http://printer.local/x", "")).is_none());
}

#[test]
fn non_http_targets_are_rejected() {
    assert!(parse(&link("ftp://example.com/file", "")).is_none());
    assert!(parse(&link("javascript:alert(1)", "")).is_none());
    assert!(parse(&link("file:///etc/passwd", "")).is_none());
}

#[test]
fn wrong_shape_is_rejected() {
    assert!(parse("").is_none());
    assert!(parse("   ").is_none());
    assert!(parse("not a link").is_none());
    assert!(parse("https://download?v=1&url=https://example.com/").is_none());
    assert!(parse("youwee://open?v=1&url=https://example.com/").is_none());
    assert!(parse("other://download?v=1&url=https://example.com/").is_none());
}

#[test]
fn version_gate() {
    assert!(parse("youwee://download?url=https://example.com/a").is_none());
    assert!(parse("youwee://download?v=2&url=https://example.com/a").is_none());
    assert!(parse("youwee://download?v=1.0&url=https://example.com/a").is_none());
    assert!(parse("youwee://download?v=1&url=https://example.com/a").is_some());
}

#[test]
fn missing_or_blank_url_is_rejected() {
    assert!(parse("youwee://download?v=1").is_none());
    assert!(parse("youwee://download?v=1&url=").is_none());
    assert!(parse("youwee://download?v=1&url=%20%20").is_none());
}

#[test]
fn unsafe_text_is_rejected() {
    assert!(parse(&link("https://example.com/%00", "")).is_none());
    assert!(parse(&link("https://example.com/../admin", "")).is_none());
    assert!(parse(&link("https://example.com/a\r\nb", "")).is_none());
}

#[test]
fn oversized_link_is_rejected() {
    let raw = link(&format!("https://example.com/{}", "a".repeat(4096)), "");
    assert!(parse(&raw).is_none());
}

#[test]
fn explicit_target_and_action() {
    let req = parse(&link(
        "https://vimeo.com/1",
        "&target=youtube&action=queue_only",
    ))
    .unwrap();
    assert_eq!(req.target(), LinkTarget::Youtube);
    assert_eq!(req.action(), LinkAction::QueueOnly);

    let req = parse(&link("https://vimeo.com/1", "&target=other&action=later")).unwrap();
    assert_eq!(req.target(), LinkTarget::Auto);
    assert_eq!(req.action(), LinkAction::DownloadNow);
}

#[test]
fn audio_options() {
    let req = parse(&link("https://youtu.be/abc", "&media=audio&quality=128")).unwrap();
    assert_eq!(
        req.enqueue_options(),
        EnqueueOptions::Audio {
            quality: AudioQuality::Audio,
            audio_bitrate: AudioBitrate::Kbps128
        }
    );

    let req = parse(&link("https://youtu.be/abc", "&media=audio&quality=320")).unwrap();
    assert_eq!(
        req.enqueue_options(),
        EnqueueOptions::Audio {
            quality: AudioQuality::Audio,
            audio_bitrate: AudioBitrate::Auto
        }
    );
}

#[test]
fn video_quality_falls_back_to_best() {
    let req = parse(&link("https://youtu.be/abc", "&quality=720")).unwrap();
    assert_eq!(
        req.enqueue_options(),
        EnqueueOptions::Video {
            quality: VideoQuality::P720
        }
    );

    for unknown in ["1440", "ultra", "128", ""] {
        let req = parse(&link("https://youtu.be/abc", &format!("&quality={unknown}"))).unwrap();
        assert_eq!(
            req.enqueue_options(),
            EnqueueOptions::Video {
                quality: VideoQuality::Best
            },
            "quality={unknown}"
        );
    }

    let req = parse(&link("https://youtu.be/abc", "&media=podcast&quality=4k")).unwrap();
    assert_eq!(
        req.enqueue_options(),
        EnqueueOptions::Video {
            quality: VideoQuality::Uhd4k
        }
    );
}

#[test]
fn source_tag_allow_list() {
    let req = parse(&link("https://youtu.be/abc", "&source=%20Browser-Extension%20")).unwrap();
    assert_eq!(req.source(), Some("browser-extension"));

    let req = parse(&link("https://youtu.be/abc", "&source=admin")).unwrap();
    assert_eq!(req.source(), None);
}

#[test]
fn output_url_is_idempotent_under_normalization() {
    let policy = LinkPolicy::default();
    for target in [
        "https://www.youtube.com/watch?v=abc123&list=PL1&index=2",
        "https://youtu.be/abc?list=PL1",
        "https://example.com/video.mp4?list=x",
    ] {
        let req = parse(&link(target, "")).unwrap();
        assert_eq!(normalize_external_video_url(req.url(), &policy), req.url());
    }
}

#[test]
fn custom_policy_is_used_for_normalization_and_sources() {
    let parser = DeepLinkParser::new(
        LinkPolicy::default()
            .with_video_hosts(["video.example.org"])
            .with_trusted_sources(["share-sheet"]),
    );
    let req = parser
        .parse(&link(
            "https://video.example.org/watch?v=1&list=2",
            "&source=SHARE-SHEET",
        ))
        .unwrap();
    assert_eq!(req.url(), "https://video.example.org/watch?v=1");
    assert_eq!(req.source(), Some("share-sheet"));
    assert_eq!(parser.route(&req), RouteTarget::Youtube);

    let req = parser.parse(&link("https://youtu.be/abc?list=PL1", "")).unwrap();
    assert_eq!(req.url(), "https://youtu.be/abc?list=PL1");
    assert_eq!(parser.route(&req), RouteTarget::Universal);
}

#[test]
fn request_serializes_camel_case() {
    let req = parse(&link("https://youtu.be/abc", "&media=audio")).unwrap();
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["target"], "auto");
    assert_eq!(json["action"], "download_now");
    assert_eq!(json["enqueueOptions"]["mediaType"], "audio");
    assert_eq!(json["enqueueOptions"]["audioBitrate"], "auto");
    assert!(json["source"].is_null());
}
