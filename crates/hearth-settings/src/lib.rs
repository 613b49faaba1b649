#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! User settings state for Hearth.
//!
//! The crate is DOM-free: it owns the [`Settings`] shape, the storage port the
//! browser and native adapters implement, and the [`SettingsStore`] handle that
//! every view reads from and writes through.

pub mod config;
pub mod error;
pub mod model;
pub mod storage;
pub mod store;

pub use config::{DEFAULT_STORAGE_KEY, SettingsConfig};
pub use error::{ConfigError, StorageError, StorageResult};
pub use model::{
    DisplayPreference, DisplayPreferences, Language, Settings, SettingsField, SettingsPatch, Theme,
    UnknownVariant,
};
pub use storage::{FileStorage, MemoryStorage, SettingsStorage};
pub use store::{
    SettingsChange, SettingsObserver, SettingsOrigin, SettingsStore, Subscription, WriteThrough,
    read_persisted,
};
