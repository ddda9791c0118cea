//! Why a deep link was rejected.
//!
//! Reasons are logged for diagnostics but never returned across the public
//! API: callers only ever see `None`, so a rejected link cannot be used to
//! discover which check failed.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum LinkRejection {
    #[error("link is empty or exceeds the length limit")]
    Length,
    #[error("link is not a parseable URL")]
    Unparseable,
    #[error("link is not a youwee://download link")]
    Shape,
    #[error("missing or unsupported link version")]
    Version,
    #[error("missing or blank target url")]
    MissingUrl,
    #[error("target url failed the text safety screen")]
    UnsafeText,
    #[error("target url is not a public http(s) url")]
    NotPublic,
}
