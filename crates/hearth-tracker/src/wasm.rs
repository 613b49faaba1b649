//! Browser tracker backed by `setInterval` through `gloo-timers`.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;

use crate::config::TrackerConfig;
use crate::error::TrackerResult;

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
    /// Returns a [`crate::TrackerError`] when the period is unusable.
    pub fn new(config: TrackerConfig) -> TrackerResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Timing config in effect.
    #[must_use]
    pub const fn config(&self) -> TrackerConfig {
        self.config
    }

    /// Start a fresh counter at zero and call `on_tick` with each new value.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::TrackerError`] when the period cannot drive a browser
    /// timer.
    pub fn mount_with<F>(&self, mut on_tick: F) -> TrackerResult<MountedTracker>
    where
        F: FnMut(u64) + 'static,
    {
        let millis = self.config.tick_millis()?;
        let elapsed = Rc::new(Cell::new(0_u64));
        let interval = {
            let elapsed = Rc::clone(&elapsed);
            Interval::new(millis, move || {
                let next = elapsed.get() + 1;
                elapsed.set(next);
                on_tick(next);
            })
        };
        Ok(MountedTracker {
            elapsed,
            _interval: interval,
        })
    }
}

/// Live counter; the browser interval is cleared when this guard is dropped.
#[must_use = "dropping the guard stops the tracker"]
pub struct MountedTracker {
    elapsed: Rc<Cell<u64>>,
    _interval: Interval,
}

impl MountedTracker {
    /// Ticks counted so far.
    #[must_use]
    pub fn elapsed(&self) -> u64 {
        self.elapsed.get()
    }

    /// Clear the interval and return the final count.
    pub fn unmount(self) -> u64 {
        self.elapsed()
    }
}
