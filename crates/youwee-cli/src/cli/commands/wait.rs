//! `youwee wait [MS]` – cancellable retry countdown.

use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use youwee_core::config::RetryConfig;
use youwee_core::retry::wait_with_cancellation;

/// Waits `duration_ms`, or the configured retry delay when omitted.
pub async fn run_wait(retry: &RetryConfig, duration_ms: Option<u64>) -> Result<i32> {
    let duration_ms =
        duration_ms.unwrap_or_else(|| u64::from(retry.effective().delay_seconds) * 1000);

    let cancelled = Arc::new(AtomicBool::new(false));
    let signal_flag = Arc::clone(&cancelled);
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_flag.store(true, Ordering::SeqCst);
        }
    });

    let completed = wait_with_cancellation(
        duration_ms,
        || cancelled.load(Ordering::SeqCst),
        Some(|remaining: u64| println!("retrying in {remaining}s")),
    )
    .await;
    ctrl_c.abort();

    if completed {
        println!("done");
        Ok(0)
    } else {
        println!("cancelled");
        Ok(1)
    }
}
