#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Elapsed-time tracking for mounted views.
//!
//! A [`TimeTracker`] hands out a [`MountedTracker`] guard that owns a periodic
//! timer. The counter starts at zero and grows by one per tick period; the
//! first increment lands one full period after mounting, so after `t` periods
//! the count is `floor(t)`. Dropping the guard cancels the timer.
//!
//! Native builds drive the timer with `tokio`; wasm builds use browser
//! intervals through `gloo-timers`.

pub mod config;
pub mod error;

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use config::{DEFAULT_TICK_PERIOD, TrackerConfig};
pub use error::{TrackerError, TrackerResult};
#[cfg(not(target_arch = "wasm32"))]
pub use native::{MountedTracker, TimeTracker};
#[cfg(target_arch = "wasm32")]
pub use wasm::{MountedTracker, TimeTracker};
