//! Read-only summary rows for the current settings.

use crate::i18n::TranslationBundle;
use hearth_settings::{DisplayPreference, Settings};

/// Label/value pair rendered by the settings summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayRow {
    /// Translated label.
    pub label: String,
    /// Rendered value.
    pub value: String,
}

/// Rows for theme, language and each display preference, in that order.
///
/// Theme and language show their serialized values; toggles show a
/// translated "Yes" or "No".
#[must_use]
pub fn display_rows(settings: &Settings, bundle: &TranslationBundle) -> Vec<DisplayRow> {
    let mut rows = vec![
        DisplayRow {
            label: bundle.text("display.theme", "Theme"),
            value: settings.theme.as_str().to_string(),
        },
        DisplayRow {
            label: bundle.text("display.language", "Language"),
            value: settings.language.as_str().to_string(),
        },
    ];
    rows.extend(DisplayPreference::ALL.iter().map(|preference| DisplayRow {
        label: crate::core::form::toggle_label(bundle, *preference),
        value: yes_no(bundle, settings.display_preferences.get(*preference)),
    }));
    rows
}

fn yes_no(bundle: &TranslationBundle, value: bool) -> String {
    if value {
        bundle.text("display.yes", "Yes")
    } else {
        bundle.text("display.no", "No")
    }
}
