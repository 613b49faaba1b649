//! Tracker error primitives.

use thiserror::Error;

/// Result alias for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Failures raised when configuring or mounting a tracker.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// The tick period was zero.
    #[error("tick period must be positive")]
    ZeroPeriod,
    /// The tick period does not fit a browser timer.
    #[error("tick period of {millis} ms exceeds the timer limit")]
    PeriodTooLong {
        /// Requested period in milliseconds.
        millis: u128,
    },
    /// Mounting happened outside an async runtime able to drive the timer.
    #[error("no runtime available to drive the tracker timer")]
    NoRuntime,
}
