//! `tokio`-driven tracker used by native builds and tests.

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use crate::config::TrackerConfig;
use crate::error::{TrackerError, TrackerResult};

/// Factory for mounted trackers sharing one timing config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeTracker {
    config: TrackerConfig,
}

impl TimeTracker {
    /// Tracker using `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`TrackerError`] when the period is unusable.
    pub fn new(config: TrackerConfig) -> TrackerResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Timing config in effect.
    #[must_use]
    pub const fn config(&self) -> TrackerConfig {
        self.config
    }

    /// Start a fresh counter at zero.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NoRuntime`] outside a `tokio` runtime.
    pub fn mount(&self) -> TrackerResult<MountedTracker> {
        self.mount_with(|_| {})
    }

    /// Start a fresh counter and call `on_tick` with each new value.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NoRuntime`] outside a `tokio` runtime.
    pub fn mount_with<F>(&self, mut on_tick: F) -> TrackerResult<MountedTracker>
    where
        F: FnMut(u64) + Send + 'static,
    {
        let handle = Handle::try_current().map_err(|_| TrackerError::NoRuntime)?;
        let period = self.config.tick_period;
        let (sender, receiver) = watch::channel(0_u64);
        let task = handle.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut elapsed = 0_u64;
            loop {
                ticker.tick().await;
                elapsed += 1;
                sender.send_replace(elapsed);
                on_tick(elapsed);
            }
        });
        debug!(period_ms = period.as_millis(), "time tracker mounted");
        Ok(MountedTracker {
            elapsed: receiver,
            task,
        })
    }
}

/// Live counter; the timer stops when this guard is dropped.
#[derive(Debug)]
#[must_use = "dropping the guard stops the tracker"]
pub struct MountedTracker {
    elapsed: watch::Receiver<u64>,
    task: JoinHandle<()>,
}

impl MountedTracker {
    /// Ticks counted so far.
    #[must_use]
    pub fn elapsed(&self) -> u64 {
        *self.elapsed.borrow()
    }

    /// Receiver that observes every new count; it keeps the last value after
    /// the tracker is unmounted.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.elapsed.clone()
    }

    /// Stop the timer and return the final count.
    pub fn unmount(self) -> u64 {
        self.elapsed()
    }

    /// Whether the timer task is still scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for MountedTracker {
    fn drop(&mut self) {
        self.task.abort();
        debug!(elapsed = *self.elapsed.borrow(), "time tracker unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn counter_starts_at_zero_and_ticks_each_period() {
        let tracker = TimeTracker::default().mount().unwrap();
        assert_eq!(tracker.elapsed(), 0);

        time::sleep(Duration::from_millis(999)).await;
        assert_eq!(tracker.elapsed(), 0);

        time::sleep(Duration::from_millis(2_501)).await;
        assert_eq!(tracker.elapsed(), 3);
        assert!(tracker.is_running());
    }

    #[test]
    fn mount_outside_runtime_is_an_error() {
        assert_eq!(
            TimeTracker::default().mount().map(MountedTracker::unmount),
            Err(TrackerError::NoRuntime)
        );
    }
}
