//! Lightweight JSON-backed translations with per-language bundles.

use hearth_settings::Language;
use serde_json::Value;
use std::sync::LazyLock;

/// Translation bundle containing a parsed JSON tree for the language.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Language backing this bundle.
    pub language: Language,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given language, falling back to English.
    ///
    /// The bundle will gracefully degrade to English strings when a key is missing.
    #[must_use]
    pub fn new(language: Language) -> Self {
        let tree: Value = serde_json::from_str(raw_bundle(language)).unwrap_or(Value::Null);
        Self { language, tree }
    }

    /// Resolve a dotted path (`section.key`) with English fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&EN_FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }

    /// BCP 47 tag written to the document `lang` attribute.
    #[must_use]
    pub fn lang_tag(&self) -> String {
        self.text("meta.lang", self.language.as_str())
    }
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(Language::En));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_bundle(language: Language) -> &'static str {
    match language {
        Language::En => include_str!("../../i18n/en.json"),
        Language::Fr => include_str!("../../i18n/fr.json"),
        Language::Es => include_str!("../../i18n/es.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_paths(node: &Value, prefix: &str, out: &mut Vec<String>) {
        if let Some(map) = node.as_object() {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                leaf_paths(child, &path, out);
            }
        } else {
            out.push(prefix.to_string());
        }
    }

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(Language::Fr);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
    }

    #[test]
    fn every_bundle_covers_the_english_keys() {
        let mut paths = Vec::new();
        leaf_paths(&EN_FALLBACK.tree, "", &mut paths);
        assert!(!paths.is_empty());
        for language in Language::ALL {
            let bundle = TranslationBundle::new(language);
            for path in &paths {
                assert!(
                    resolve(&bundle.tree, path).is_some(),
                    "{language} bundle is missing {path}"
                );
            }
        }
    }

    #[test]
    fn bundles_translate_labels() {
        assert_eq!(
            TranslationBundle::new(Language::En).text("settings.title", ""),
            "User Settings"
        );
        assert_eq!(
            TranslationBundle::new(Language::Fr).text("theme.dark", ""),
            "Sombre"
        );
        assert_eq!(
            TranslationBundle::new(Language::Es).text("display.yes", ""),
            "Sí"
        );
    }

    #[test]
    fn lang_tag_matches_language_code() {
        for language in Language::ALL {
            assert_eq!(TranslationBundle::new(language).lang_tag(), language.as_str());
        }
    }
}
