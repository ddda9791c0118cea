//! `youwee retry-settings` – show the clamped retry settings.

use anyhow::Result;
use youwee_core::config::RetryConfig;

pub fn run_retry_settings(retry: &RetryConfig) -> Result<i32> {
    let effective = retry.effective();
    println!("{}", serde_json::to_string_pretty(&effective)?);
    Ok(0)
}
