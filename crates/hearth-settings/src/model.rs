//! Settings domain types and merge rules.
//!
//! # Design
//! - `Settings` is always fully populated; missing stored fields take defaults.
//! - Patches merge shallowly: a `display_preferences` patch replaces the whole
//!   nested record, so callers flip one toggle via [`Settings::toggle_patch`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Colour scheme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl Theme {
    /// All supported themes in display order.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// Stable identifier used in storage and CSS datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// English label for option lists.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == value)
            .ok_or_else(|| UnknownVariant::new("theme", value))
    }
}

/// Interface language preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// French.
    Fr,
    /// Spanish.
    Es,
}

impl Language {
    /// All supported languages in display order.
    pub const ALL: [Self; 3] = [Self::En, Self::Fr, Self::Es];

    /// Two-letter code used in storage and the `lang` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Es => "es",
        }
    }

    /// English label for option lists.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "French",
            Self::Es => "Spanish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.as_str() == value)
            .ok_or_else(|| UnknownVariant::new("language", value))
    }
}

/// Error returned when an option value does not name a known variant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} value `{value}`")]
pub struct UnknownVariant {
    /// Field the value was meant for.
    pub field: &'static str,
    /// Offending value.
    pub value: String,
}

impl UnknownVariant {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// Names one of the nested display toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayPreference {
    /// Whether images are rendered.
    ShowImages,
    /// Whether notifications are shown.
    ShowNotifications,
}

impl DisplayPreference {
    /// Both toggles in display order.
    pub const ALL: [Self; 2] = [Self::ShowImages, Self::ShowNotifications];

    /// Serialized key of the toggle inside `displayPreferences`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ShowImages => "showImages",
            Self::ShowNotifications => "showNotifications",
        }
    }
}

/// Nested display toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayPreferences {
    /// Render images on pages.
    pub show_images: bool,
    /// Surface notifications.
    pub show_notifications: bool,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            show_images: true,
            show_notifications: true,
        }
    }
}

impl DisplayPreferences {
    /// Read a single toggle.
    #[must_use]
    pub const fn get(self, preference: DisplayPreference) -> bool {
        match preference {
            DisplayPreference::ShowImages => self.show_images,
            DisplayPreference::ShowNotifications => self.show_notifications,
        }
    }

    /// Write a single toggle.
    pub const fn set(&mut self, preference: DisplayPreference, value: bool) {
        match preference {
            DisplayPreference::ShowImages => self.show_images = value,
            DisplayPreference::ShowNotifications => self.show_notifications = value,
        }
    }

    /// Copy of the record with one toggle flipped and the other left intact.
    #[must_use]
    pub const fn toggled(mut self, preference: DisplayPreference) -> Self {
        self.set(preference, !self.get(preference));
        self
    }
}

/// Top-level settings fields, used to describe what an update changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingsField {
    /// The `theme` field.
    Theme,
    /// The `language` field.
    Language,
    /// The `displayPreferences` record.
    DisplayPreferences,
}

/// The persisted user-preference record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Colour scheme.
    pub theme: Theme,
    /// Interface language.
    pub language: Language,
    /// Nested display toggles.
    pub display_preferences: DisplayPreferences,
}

impl Settings {
    /// Apply a patch in place, replacing only the fields it carries.
    pub const fn merge(&mut self, patch: &SettingsPatch) {
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
        if let Some(display) = patch.display_preferences {
            self.display_preferences = display;
        }
    }

    /// Return the result of merging `patch` into a copy of `self`.
    #[must_use]
    pub const fn merged(mut self, patch: &SettingsPatch) -> Self {
        self.merge(patch);
        self
    }

    /// Patch that flips one display toggle while carrying the other one over.
    #[must_use]
    pub const fn toggle_patch(&self, preference: DisplayPreference) -> SettingsPatch {
        SettingsPatch::display_preferences(self.display_preferences.toggled(preference))
    }

    /// Top-level fields whose values differ between `self` and `other`.
    #[must_use]
    pub fn changed_fields(&self, other: &Self) -> Vec<SettingsField> {
        let mut changed = Vec::new();
        if self.theme != other.theme {
            changed.push(SettingsField::Theme);
        }
        if self.language != other.language {
            changed.push(SettingsField::Language);
        }
        if self.display_preferences != other.display_preferences {
            changed.push(SettingsField::DisplayPreferences);
        }
        changed
    }
}

/// Partial settings update; `None` leaves the field untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsPatch {
    /// Replacement theme.
    pub theme: Option<Theme>,
    /// Replacement language.
    pub language: Option<Language>,
    /// Replacement for the whole nested record.
    pub display_preferences: Option<DisplayPreferences>,
}

impl SettingsPatch {
    /// Patch replacing only the theme.
    #[must_use]
    pub const fn theme(theme: Theme) -> Self {
        Self {
            theme: Some(theme),
            language: None,
            display_preferences: None,
        }
    }

    /// Patch replacing only the language.
    #[must_use]
    pub const fn language(language: Language) -> Self {
        Self {
            theme: None,
            language: Some(language),
            display_preferences: None,
        }
    }

    /// Patch replacing the nested display record.
    #[must_use]
    pub const fn display_preferences(display: DisplayPreferences) -> Self {
        Self {
            theme: None,
            language: None,
            display_preferences: Some(display),
        }
    }

    /// Patch carrying every field of `settings`.
    #[must_use]
    pub const fn full(settings: Settings) -> Self {
        Self {
            theme: Some(settings.theme),
            language: Some(settings.language),
            display_preferences: Some(settings.display_preferences),
        }
    }

    /// Whether the patch carries no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.theme.is_none() && self.language.is_none() && self.display_preferences.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_documented_shape() {
        let value = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "theme": "light",
                "language": "en",
                "displayPreferences": {
                    "showImages": true,
                    "showNotifications": true
                }
            })
        );
    }

    #[test]
    fn theme_patch_leaves_other_fields() {
        let current = Settings {
            theme: Theme::Light,
            language: Language::Fr,
            display_preferences: DisplayPreferences {
                show_images: false,
                show_notifications: true,
            },
        };
        let next = current.merged(&SettingsPatch::theme(Theme::Dark));
        assert_eq!(next.theme, Theme::Dark);
        assert_eq!(next.language, Language::Fr);
        assert_eq!(next.display_preferences, current.display_preferences);
    }

    #[test]
    fn toggle_patch_keeps_sibling_preference() {
        let patch = Settings::default().toggle_patch(DisplayPreference::ShowImages);
        let next = Settings::default().merged(&patch);
        assert_eq!(
            next.display_preferences,
            DisplayPreferences {
                show_images: false,
                show_notifications: true,
            }
        );
    }

    #[test]
    fn display_patch_replaces_whole_record() {
        let patch = SettingsPatch::display_preferences(DisplayPreferences {
            show_images: false,
            show_notifications: false,
        });
        let next = Settings::default().merged(&patch);
        assert!(!next.display_preferences.show_images);
        assert!(!next.display_preferences.show_notifications);
    }

    #[test]
    fn partial_stored_object_fills_defaults() {
        let parsed: Settings =
            serde_json::from_str(r#"{"theme":"dark","displayPreferences":{"showImages":false}}"#)
                .unwrap();
        assert_eq!(parsed.theme, Theme::Dark);
        assert_eq!(parsed.language, Language::En);
        assert!(!parsed.display_preferences.show_images);
        assert!(parsed.display_preferences.show_notifications);
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        assert!(serde_json::from_str::<Settings>(r#"{"theme":"sepia"}"#).is_err());
        assert_eq!(
            "de".parse::<Language>(),
            Err(UnknownVariant {
                field: "language",
                value: "de".to_string(),
            })
        );
    }

    #[test]
    fn option_values_round_trip_through_from_str() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        }
        for language in Language::ALL {
            assert_eq!(language.to_string().parse::<Language>(), Ok(language));
        }
    }

    #[test]
    fn changed_fields_lists_differences() {
        let base = Settings::default();
        let next = base.merged(&SettingsPatch {
            language: Some(Language::Es),
            display_preferences: Some(base.display_preferences.toggled(
                DisplayPreference::ShowNotifications,
            )),
            ..SettingsPatch::default()
        });
        assert_eq!(
            base.changed_fields(&next),
            vec![SettingsField::Language, SettingsField::DisplayPreferences]
        );
        assert!(base.changed_fields(&base).is_empty());
    }

    #[test]
    fn patch_serializes_with_camel_case_keys() {
        let patch: SettingsPatch =
            serde_json::from_value(json!({"displayPreferences": {"showImages": false}})).unwrap();
        assert!(patch.theme.is_none());
        assert_eq!(
            patch.display_preferences.map(|d| d.get(DisplayPreference::ShowImages)),
            Some(false)
        );
        assert!(SettingsPatch::default().is_empty());
        assert!(!SettingsPatch::full(Settings::default()).is_empty());
        assert_eq!(DisplayPreference::ShowNotifications.key(), "showNotifications");
    }
}
