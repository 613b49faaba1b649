//! Telemetry primitives shared across the Hearth workspace.
//!
//! Native entry points install the `tracing` subscriber from here so the
//! library crates can emit structured events without caring who listens.

pub mod error;
pub mod init;

pub use error::{Result, TelemetryError};
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging};
