//! Inter-call pacing for the MCP session.
//!
//! The MoSPI server rejects bursty sessions with 429s, so every tool call
//! waits a fixed interval after the previous one. The wait is behind a
//! trait so tests can run without wall-clock delays.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Trait for spacing out consecutive calls on a shared session.
#[async_trait]
pub trait CallPacer: Send + Sync {
    /// Wait until the next call is allowed, then mark it as issued.
    async fn pace(&self);
}

/// Pacer that enforces a minimum interval between calls using tokio sleeps.
pub struct IntervalPacer {
    interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl IntervalPacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_call: Mutex::new(None),
        }
    }
}

#[async_trait]
impl CallPacer for IntervalPacer {
    async fn pace(&self) {
        let mut last = self.last_call.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.interval {
                tokio::time::sleep(self.interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}

/// Pacer that never waits. For tests and mocked remotes.
pub struct NoopPacer;

#[async_trait]
impl CallPacer for NoopPacer {
    async fn pace(&self) {}
}
