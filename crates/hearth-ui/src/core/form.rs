//! Mapping from settings form inputs to store operations.

use crate::i18n::TranslationBundle;
use hearth_settings::{
    DisplayPreference, Language, Settings, SettingsStore, Theme, UnknownVariant,
};

/// A single interaction with the settings form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormInput {
    /// Raw value chosen in the theme select.
    Theme(String),
    /// Raw value chosen in the language select.
    Language(String),
    /// A display preference checkbox was clicked.
    Toggle(DisplayPreference),
    /// The reset button was pressed.
    Reset,
}

/// Apply one form input to the store, returning the settings that resulted.
///
/// # Errors
///
/// Returns [`UnknownVariant`] when a select reports a value outside the
/// supported set; the store is left untouched in that case.
pub fn apply_form_input(
    store: &SettingsStore,
    input: &FormInput,
) -> Result<Settings, UnknownVariant> {
    Ok(match input {
        FormInput::Theme(raw) => store.set_theme(raw.parse::<Theme>()?),
        FormInput::Language(raw) => store.set_language(raw.parse::<Language>()?),
        FormInput::Toggle(preference) => store.toggle_display_preference(*preference),
        FormInput::Reset => store.reset(),
    })
}

/// One `<option>` of a select control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    /// Serialized value submitted by the control.
    pub value: &'static str,
    /// Translated label.
    pub label: String,
}

/// Options for the theme select.
#[must_use]
pub fn theme_options(bundle: &TranslationBundle) -> Vec<SelectOption> {
    Theme::ALL
        .iter()
        .map(|theme| SelectOption {
            value: theme.as_str(),
            label: bundle.text(&format!("theme.{}", theme.as_str()), theme.label()),
        })
        .collect()
}

/// Options for the language select.
#[must_use]
pub fn language_options(bundle: &TranslationBundle) -> Vec<SelectOption> {
    Language::ALL
        .iter()
        .map(|language| SelectOption {
            value: language.as_str(),
            label: bundle.text(&format!("language.{}", language.as_str()), language.label()),
        })
        .collect()
}

/// Translated checkbox label for a display preference.
#[must_use]
pub fn toggle_label(bundle: &TranslationBundle, preference: DisplayPreference) -> String {
    match preference {
        DisplayPreference::ShowImages => bundle.text("settings.show_images", "Show Images"),
        DisplayPreference::ShowNotifications => {
            bundle.text("settings.show_notifications", "Show Notifications")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_settings::{DisplayPreferences, MemoryStorage, SettingsConfig};

    fn store() -> SettingsStore {
        SettingsStore::initialize(MemoryStorage::new(), &SettingsConfig::default())
    }

    #[test]
    fn selects_map_to_setters() {
        let store = store();
        let next = apply_form_input(&store, &FormInput::Theme("dark".into())).unwrap();
        assert_eq!(next.theme, Theme::Dark);
        let next = apply_form_input(&store, &FormInput::Language("es".into())).unwrap();
        assert_eq!(next.language, Language::Es);
        assert_eq!(next.theme, Theme::Dark);
    }

    #[test]
    fn checkbox_toggles_only_its_preference() {
        let store = store();
        let next =
            apply_form_input(&store, &FormInput::Toggle(DisplayPreference::ShowImages)).unwrap();
        assert_eq!(
            next.display_preferences,
            DisplayPreferences {
                show_images: false,
                show_notifications: true,
            }
        );
    }

    #[test]
    fn unknown_select_value_leaves_store_untouched() {
        let store = store();
        let err = apply_form_input(&store, &FormInput::Theme("sepia".into())).unwrap_err();
        assert_eq!(err.value, "sepia");
        assert_eq!(store.snapshot(), Settings::default());
    }

    #[test]
    fn reset_restores_defaults() {
        let store = store();
        store.set_theme(Theme::Dark);
        let next = apply_form_input(&store, &FormInput::Reset).unwrap();
        assert_eq!(next, Settings::default());
    }

    #[test]
    fn options_follow_enum_order_and_language() {
        let options = theme_options(&TranslationBundle::new(Language::Fr));
        let values: Vec<_> = options.iter().map(|option| option.value).collect();
        assert_eq!(values, ["light", "dark"]);
        assert_eq!(options[1].label, "Sombre");

        let languages = language_options(&TranslationBundle::new(Language::En));
        assert_eq!(languages.len(), 3);
        assert_eq!(languages[2].label, "Spanish");
    }
}
