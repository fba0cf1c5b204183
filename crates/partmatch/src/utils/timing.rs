//! Cross-platform async sleep.

/// Suspends the current task for `ms` milliseconds.
///
/// Uses the browser's timer on WASM and tokio's on native, so the same
/// call works under both renderers.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}
