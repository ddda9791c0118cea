//! Bounds for externally supplied retry settings.

use serde::{Deserialize, Serialize};

/// Inclusive integer range with a default for missing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryLimits {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

/// Automatic retry attempts per download.
pub const AUTO_RETRY_MAX_ATTEMPT_LIMITS: RetryLimits = RetryLimits {
    min: 1,
    max: 10,
    default: 3,
};

/// Seconds to wait between automatic retries.
pub const AUTO_RETRY_DELAY_LIMITS: RetryLimits = RetryLimits {
    min: 1,
    max: 300,
    default: 5,
};

impl RetryLimits {
    /// Clamps `value` into `[min, max]`.
    ///
    /// Missing, zero, and NaN values take the default; zero attempts or a zero
    /// delay are never let through. Fractions are truncated first.
    pub fn clamp(&self, value: Option<f64>) -> u32 {
        let value = match value {
            Some(v) if v != 0.0 && !v.is_nan() => v,
            _ => return self.default,
        };
        let (min, max) = (f64::from(self.min), f64::from(self.max));
        value.trunc().clamp(min, max) as u32
    }
}

pub fn clamp_auto_retry_max_attempts(value: Option<f64>) -> u32 {
    AUTO_RETRY_MAX_ATTEMPT_LIMITS.clamp(value)
}

pub fn clamp_auto_retry_delay_seconds(value: Option<f64>) -> u32 {
    AUTO_RETRY_DELAY_LIMITS.clamp(value)
}
