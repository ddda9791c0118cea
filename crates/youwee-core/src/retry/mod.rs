//! Retry policy for failed downloads.
//!
//! This module classifies error messages coming back from the download
//! subprocess (transient network trouble vs. terminal conditions), clamps
//! user-supplied retry settings, and provides the cancellable countdown the
//! caller awaits between attempts. The retry loop itself belongs to the
//! caller.

mod classify;
mod limits;
mod message;
mod wait;

pub use classify::{
    classify_error, is_non_retryable_error, is_retryable_error, ClassificationOutcome,
    ClassificationRule, ErrorClassifier, RULES,
};
pub use limits::{
    clamp_auto_retry_delay_seconds, clamp_auto_retry_max_attempts, RetryLimits,
    AUTO_RETRY_DELAY_LIMITS, AUTO_RETRY_MAX_ATTEMPT_LIMITS,
};
pub use message::{describe_error, error_message, UNKNOWN_ERROR};
pub use wait::{wait_with_cancellation, TICK};
