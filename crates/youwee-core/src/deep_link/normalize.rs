//! Single-item normalization for video platform URLs.

use url::Url;

use super::policy::LinkPolicy;

/// Strips playlist companion parameters from single-item video URLs.
///
/// Applies only when the host is a recognized video host and the URL names
/// one item (a non-blank `v` parameter, or an id path segment on a short-link
/// host). Matching URLs come back in serialized form; everything else,
/// including unparseable input, is returned unchanged. Idempotent.
pub fn normalize_external_video_url(url: &str, policy: &LinkPolicy) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };
    let Some(host) = parsed.host_str().map(str::to_ascii_lowercase) else {
        return url.to_string();
    };
    if !policy.is_video_host(&host) || !has_item_id(&parsed, &host, policy) {
        return url.to_string();
    }

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(name, _)| !policy.is_stripped_param(name))
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();
    let stripped_any = parsed
        .query_pairs()
        .any(|(name, _)| policy.is_stripped_param(&name));

    if stripped_any {
        if kept.is_empty() {
            parsed.set_query(None);
        } else {
            parsed.query_pairs_mut().clear().extend_pairs(kept);
        }
    }
    parsed.to_string()
}

fn has_item_id(url: &Url, host: &str, policy: &LinkPolicy) -> bool {
    let has_video_param = url
        .query_pairs()
        .any(|(name, value)| name == "v" && !value.trim().is_empty());
    if has_video_param {
        return true;
    }
    policy.is_short_link_host(host)
        && url
            .path_segments()
            .and_then(|mut segments| segments.next())
            .is_some_and(|id| !id.is_empty())
}
