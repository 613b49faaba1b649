//! Tracker timing configuration.

use std::time::Duration;

use crate::error::{TrackerError, TrackerResult};

/// Default cadence: one increment per second.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

// Browser timers take a signed 32-bit millisecond delay.
const MAX_TICK_MILLIS: u128 = i32::MAX as u128;

/// Timing settings for a [`crate::TimeTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Interval between counter increments.
    pub tick_period: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
        }
    }
}

impl TrackerConfig {
    /// Config with a custom period.
    #[must_use]
    pub const fn with_period(tick_period: Duration) -> Self {
        Self { tick_period }
    }

    /// Check the period can drive a timer on every target.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ZeroPeriod`] or [`TrackerError::PeriodTooLong`].
    pub fn validate(&self) -> TrackerResult<()> {
        self.tick_millis().map(|_| ())
    }

    /// Period in whole milliseconds, as browser timers expect.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ZeroPeriod`] or [`TrackerError::PeriodTooLong`].
    pub fn tick_millis(&self) -> TrackerResult<u32> {
        let millis = self.tick_period.as_millis();
        if millis == 0 {
            return Err(TrackerError::ZeroPeriod);
        }
        if millis > MAX_TICK_MILLIS {
            return Err(TrackerError::PeriodTooLong { millis });
        }
        u32::try_from(millis).map_err(|_| TrackerError::PeriodTooLong { millis })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_period_is_one_second() {
        let config = TrackerConfig::default();
        assert_eq!(config.tick_millis(), Ok(1_000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_and_oversized_periods_are_rejected() {
        assert_eq!(
            TrackerConfig::with_period(Duration::from_micros(10)).validate(),
            Err(TrackerError::ZeroPeriod)
        );
        assert!(matches!(
            TrackerConfig::with_period(Duration::from_secs(60 * 60 * 24 * 30)).validate(),
            Err(TrackerError::PeriodTooLong { .. })
        ));
    }
}
