//! Text for the time-tracked page.

use crate::i18n::TranslationBundle;

/// "Time Spent on Page: N seconds" in the active language.
#[must_use]
pub fn time_spent_text(bundle: &TranslationBundle, elapsed: u64) -> String {
    format!(
        "{}: {elapsed} {}",
        bundle.text("page.time_spent", "Time Spent on Page"),
        bundle.text("page.seconds", "seconds")
    )
}

/// "Current Time: <clock>" in the active language.
#[must_use]
pub fn current_time_text(bundle: &TranslationBundle, clock: &str) -> String {
    format!("{}: {clock}", bundle.text("page.current_time", "Current Time"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_settings::Language;

    #[test]
    fn english_matches_the_page_copy() {
        let bundle = TranslationBundle::new(Language::En);
        assert_eq!(time_spent_text(&bundle, 0), "Time Spent on Page: 0 seconds");
        assert_eq!(time_spent_text(&bundle, 42), "Time Spent on Page: 42 seconds");
        assert_eq!(
            current_time_text(&bundle, "10:15:00 AM"),
            "Current Time: 10:15:00 AM"
        );
    }

    #[test]
    fn other_languages_translate_the_suffix() {
        let bundle = TranslationBundle::new(Language::Es);
        assert_eq!(time_spent_text(&bundle, 3), "Tiempo en la página: 3 segundos");
    }
}
