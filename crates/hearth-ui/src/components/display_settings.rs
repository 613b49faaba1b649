use crate::core::display::display_rows;
use crate::i18n::TranslationBundle;
use hearth_settings::Settings;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DisplaySettingsProps {
    pub settings: Settings,
    pub bundle: TranslationBundle,
}

#[function_component(DisplaySettings)]
pub(crate) fn display_settings(props: &DisplaySettingsProps) -> Html {
    html! {
        <section class="display-settings">
            <h2>{props.bundle.text("display.title", "Current User Settings")}</h2>
            {for display_rows(&props.settings, &props.bundle).into_iter().map(|row| html! {
                <p><strong>{row.label}{": "}</strong>{row.value}</p>
            })}
        </section>
    }
}
