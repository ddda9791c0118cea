use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::deep_link::LinkPolicy;
use crate::retry::{AUTO_RETRY_DELAY_LIMITS, AUTO_RETRY_MAX_ATTEMPT_LIMITS};

/// Automatic retry settings (`[retry]` in config.toml).
///
/// Values are stored as written (any number, including negatives and
/// fractions); read them through [`RetryConfig::effective`] so out-of-range
/// numbers never reach the retry loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Attempts per download, including the first.
    #[serde(default)]
    pub max_attempts: Option<f64>,
    /// Seconds to wait between attempts.
    #[serde(default)]
    pub delay_seconds: Option<f64>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: Some(f64::from(AUTO_RETRY_MAX_ATTEMPT_LIMITS.default)),
            delay_seconds: Some(f64::from(AUTO_RETRY_DELAY_LIMITS.default)),
        }
    }
}

/// Clamped `(max_attempts, delay_seconds)` handed to the retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EffectiveRetry {
    pub max_attempts: u32,
    pub delay_seconds: u32,
}

impl RetryConfig {
    pub fn effective(&self) -> EffectiveRetry {
        EffectiveRetry {
            max_attempts: AUTO_RETRY_MAX_ATTEMPT_LIMITS.clamp(self.max_attempts),
            delay_seconds: AUTO_RETRY_DELAY_LIMITS.clamp(self.delay_seconds),
        }
    }
}

/// Optional overrides for the deep-link allow-sets (`[links]`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Replaces the built-in trusted source tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trusted_sources: Option<Vec<String>>,
    /// Replaces the built-in video platform hosts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_hosts: Option<Vec<String>>,
}

impl LinkConfig {
    pub fn policy(&self) -> LinkPolicy {
        let mut policy = LinkPolicy::default();
        if let Some(sources) = &self.trusted_sources {
            policy = policy.with_trusted_sources(sources);
        }
        if let Some(hosts) = &self.video_hosts {
            policy = policy.with_video_hosts(hosts);
        }
        policy
    }
}

/// Global configuration loaded from `~/.config/youwee/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YouweeConfig {
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub links: LinkConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("youwee")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<YouweeConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<YouweeConfig> {
    if !path.exists() {
        let default_cfg = YouweeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg: YouweeConfig =
        toml::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}
