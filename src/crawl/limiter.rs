//! Bounded fan-out: a dedicated worker pool capping in-flight directory reads.

use anyhow::{Context, Result};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::utils::config::FanOutLimits;

/// Worker pool with exactly `cap` threads. Directory reads are blocking, so a
/// read in flight occupies a pool thread; nested fan-out reuses the same pool,
/// which keeps the cap global across recursion depth. Work beyond the cap
/// waits for a thread to free up; backpressure, never cancellation.
pub struct FanOut {
    pool: ThreadPool,
}

impl FanOut {
    pub fn new(max_in_flight: Option<usize>) -> Result<Self> {
        let cap = max_in_flight
            .unwrap_or(FanOutLimits::DEFAULT_MAX_IN_FLIGHT)
            .max(FanOutLimits::FLOOR);
        let pool = ThreadPoolBuilder::new()
            .num_threads(cap)
            .thread_name(|i| format!("{}-crawl-{i}", env!("CARGO_PKG_NAME")))
            .build()
            .context("build crawl worker pool")?;
        Ok(Self { pool })
    }

    pub fn cap(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `op` inside the pool. Every `par_iter` fan-out underneath it is
    /// bounded by the pool size.
    pub fn install<R: Send>(&self, op: impl FnOnce() -> R + Send) -> R {
        self.pool.install(op)
    }
}
