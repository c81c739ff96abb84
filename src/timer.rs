//! Cancellable repeating timer.
//!
//! A `RepeatingTimer` owns a tokio task that calls a tick callback every
//! `period`, first at `start + period`. Dropping the timer cancels the task;
//! once cancelled, no further tick callback runs, and a tick already in
//! progress on another worker thread finishes before cancellation returns.

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Errors raised when acquiring a timer.
#[derive(Debug, thiserror::Error)]
pub enum TimerError {
    #[error("Repeating timer requires a running tokio runtime")]
    NoRuntime,
}

/// Shared counters describing a timer's lifetime.
#[derive(Debug, Default)]
struct TimerCounters {
    ticks: AtomicU64,
    cancellations: AtomicU64,
    active: AtomicBool,
    /// Held for the whole of a tick: cancellation check, count and callback.
    tick_gate: Mutex<()>,
}

/// Read-only view of a timer, valid after the timer itself is gone.
#[derive(Debug, Clone)]
pub struct TimerProbe {
    counters: Arc<TimerCounters>,
}

impl TimerProbe {
    /// Number of tick callbacks run so far.
    pub fn ticks(&self) -> u64 {
        self.counters.ticks.load(Ordering::SeqCst)
    }

    /// How many times the timer was cancelled (0 or 1).
    pub fn cancellations(&self) -> u64 {
        self.counters.cancellations.load(Ordering::SeqCst)
    }

    /// Whether the timer is still scheduled.
    pub fn is_active(&self) -> bool {
        self.counters.active.load(Ordering::SeqCst)
    }
}

pub struct RepeatingTimer {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
    counters: Arc<TimerCounters>,
    period: Duration,
}

impl RepeatingTimer {
    /// Spawn a timer on the current tokio runtime.
    ///
    /// `on_tick` receives the 1-based tick number. It runs on the timer task
    /// and must not block.
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> Result<Self, TimerError>
    where
        F: FnMut(u64) + Send + 'static,
    {
        let handle = Handle::try_current().map_err(|_| TimerError::NoRuntime)?;

        let token = CancellationToken::new();
        let counters = Arc::new(TimerCounters::default());
        counters.active.store(true, Ordering::SeqCst);

        let task_token = token.clone();
        let task_counters = Arc::clone(&counters);
        let start = Instant::now() + period;

        let join = handle.spawn(async move {
            let mut interval = interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                tokio::select! {
                    biased;
                    _ = task_token.cancelled() => break,
                    _ = interval.tick() => {
                        let _gate = task_counters
                            .tick_gate
                            .lock()
                            .unwrap_or_else(|e| e.into_inner());
                        if task_token.is_cancelled() {
                            break;
                        }
                        let n = task_counters.ticks.fetch_add(1, Ordering::SeqCst) + 1;
                        trace!(tick = n, "timer:tick");
                        on_tick(n);
                    }
                }
            }
        });

        debug!(period_ms = period.as_millis() as u64, "timer:start");
        Ok(Self {
            token,
            handle: Some(join),
            counters,
            period,
        })
    }

    pub fn probe(&self) -> TimerProbe {
        TimerProbe {
            counters: Arc::clone(&self.counters),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Cancel the timer. Consumes it so cancellation happens exactly once.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        self.token.cancel();
        // Waits out a tick running on another worker; later ticks see the token.
        drop(
            self.counters
                .tick_gate
                .lock()
                .unwrap_or_else(|e| e.into_inner()),
        );
        handle.abort();
        self.counters.active.store(false, Ordering::SeqCst);
        self.counters.cancellations.fetch_add(1, Ordering::SeqCst);
        debug!(ticks = self.counters.ticks.load(Ordering::SeqCst), "timer:cancel");
    }
}

impl Drop for RepeatingTimer {
    fn drop(&mut self) {
        self.release();
    }
}
