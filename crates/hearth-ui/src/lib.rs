#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Hearth web UI.
//! This crate holds the Yew front-end entrypoint plus the DOM-free view logic and translations.

pub mod core;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::form::{FormInput, apply_form_input};
    use crate::core::theme::DocumentAttributes;
    use crate::i18n::TranslationBundle;
    use hearth_settings::{MemoryStorage, SettingsConfig, SettingsStore};

    #[test]
    fn translation_fallbacks_work() {
        let bundle = TranslationBundle::new(hearth_settings::Language::Fr);
        assert_eq!(bundle.text("page.missing_key", "Default"), "Default");
    }

    #[test]
    fn form_changes_drive_document_attributes() {
        let storage = MemoryStorage::new();
        let store = SettingsStore::initialize(storage, &SettingsConfig::default());
        apply_form_input(&store, &FormInput::Theme("dark".into())).unwrap();
        let settings = apply_form_input(&store, &FormInput::Language("fr".into())).unwrap();
        let attributes = DocumentAttributes::from_settings(&settings);
        assert_eq!(attributes.theme, "dark");
        assert_eq!(attributes.lang, "fr");
    }
}
