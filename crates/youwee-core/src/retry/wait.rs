//! Cancellable per-second countdown between retry attempts.

use std::time::Duration;

/// Granularity of the countdown and of cancellation polling.
pub const TICK: Duration = Duration::from_secs(1);

/// Waits `duration_ms` (rounded up to whole seconds), polling `is_cancelled`
/// before every second and once more at the end.
///
/// `on_tick` receives the remaining whole seconds before each second is
/// slept. Returns `true` only if the full duration elapsed uncancelled.
pub async fn wait_with_cancellation<C, T>(
    duration_ms: u64,
    is_cancelled: C,
    mut on_tick: Option<T>,
) -> bool
where
    C: Fn() -> bool,
    T: FnMut(u64),
{
    let seconds = duration_ms.div_ceil(1000);
    for remaining in (1..=seconds).rev() {
        if is_cancelled() {
            tracing::debug!(remaining, "retry wait cancelled");
            return false;
        }
        if let Some(tick) = on_tick.as_mut() {
            tick(remaining);
        }
        tokio::time::sleep(TICK).await;
    }
    !is_cancelled()
}
