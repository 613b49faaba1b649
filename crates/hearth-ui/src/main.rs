#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Hearth UI wasm entry point and native stub fallback.
//!
//! Natively the binary only loads the file-backed settings slot named by
//! `HEARTH_STATE_DIR` / `HEARTH_SETTINGS_KEY` and reports it.

#[cfg(target_arch = "wasm32")]
fn main() {
    hearth_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    hearth_telemetry::init_logging(&hearth_telemetry::LoggingConfig::default())?;
    let config = hearth_settings::SettingsConfig::from_env()?;
    load_native_settings(&config);
    tracing::warn!(
        build_sha = hearth_telemetry::build_sha(),
        "the hearth-ui binary is intended for wasm32; build with `trunk build` or `cargo build --target wasm32-unknown-unknown`"
    );
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn load_native_settings(
    config: &hearth_settings::SettingsConfig,
) -> Option<hearth_settings::Settings> {
    use hearth_settings::{FileStorage, SettingsStore};

    let Some(storage) = FileStorage::from_config(config) else {
        tracing::info!("no state directory configured; skipping native settings slot");
        return None;
    };
    let store = SettingsStore::initialize(storage, config);
    let settings = store.snapshot();
    tracing::info!(
        key = store.storage_key(),
        origin = ?store.origin(),
        theme = %settings.theme,
        language = %settings.language,
        "native settings slot loaded"
    );
    Some(settings)
}
