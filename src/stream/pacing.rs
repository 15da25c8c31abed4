// src/stream/pacing.rs
use std::time::Duration;

/// Decides how long the driver waits between datagrams.
#[allow(async_fn_in_trait)]
pub trait Pacer {
    async fn pause(&mut self);
}

/// Real wall-clock pause of a fixed length.
#[derive(Debug, Clone, Copy)]
pub struct SleepPacer {
    delay: Duration,
}

impl SleepPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Pacer for SleepPacer {
    async fn pause(&mut self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
