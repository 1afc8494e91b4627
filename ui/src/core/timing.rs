//! Timer helpers shared by components.

/// Sleep for `ms` milliseconds on the current platform's timer.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sleeps_for_the_requested_time() {
        let start = tokio::time::Instant::now();
        sleep_ms(5_000).await;
        assert!(start.elapsed() >= Duration::from_millis(5_000));
    }
}
