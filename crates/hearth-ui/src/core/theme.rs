//! Document-level attributes derived from the settings.

use crate::i18n::TranslationBundle;
use hearth_settings::Settings;

/// Values written to `<body data-theme>` and `<html lang>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentAttributes {
    /// `data-theme` value.
    pub theme: &'static str,
    /// `lang` value.
    pub lang: String,
}

impl DocumentAttributes {
    /// Attributes for the given settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            theme: settings.theme.as_str(),
            lang: TranslationBundle::new(settings.language).lang_tag(),
        }
    }
}
