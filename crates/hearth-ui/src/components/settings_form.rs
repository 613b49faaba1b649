use crate::components::controls::{OptionSelect, ToggleField};
use crate::core::form::{
    FormInput, apply_form_input, language_options, theme_options, toggle_label,
};
use crate::i18n::TranslationBundle;
use gloo::console;
use hearth_settings::{DisplayPreference, Settings, SettingsStore};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsFormProps {
    pub store: SettingsStore,
    pub settings: Settings,
    pub bundle: TranslationBundle,
}

#[function_component(SettingsForm)]
pub(crate) fn settings_form(props: &SettingsFormProps) -> Html {
    let dispatch = {
        let store = props.store.clone();
        Callback::from(move |input: FormInput| {
            if let Err(err) = apply_form_input(&store, &input) {
                console::error!("rejected settings input", err.to_string());
            }
        })
    };
    let bundle = &props.bundle;
    let settings = props.settings;

    let on_theme = dispatch.reform(FormInput::Theme);
    let on_language = dispatch.reform(FormInput::Language);
    let on_reset = dispatch.reform(|_: MouseEvent| FormInput::Reset);

    html! {
        <section class="settings">
            <h2>{bundle.text("settings.title", "User Settings")}</h2>
            <OptionSelect
                label={bundle.text("settings.theme", "Theme")}
                options={theme_options(bundle)}
                value={settings.theme.as_str()}
                onchange={on_theme}
            />
            <OptionSelect
                label={bundle.text("settings.language", "Language")}
                options={language_options(bundle)}
                value={settings.language.as_str()}
                onchange={on_language}
            />
            <div class="setting">
                <span>{bundle.text("settings.display", "Display Preferences")}{":"}</span>
                {for DisplayPreference::ALL.iter().map(|preference| {
                    let preference = *preference;
                    html! {
                        <ToggleField
                            label={toggle_label(bundle, preference)}
                            checked={settings.display_preferences.get(preference)}
                            onchange={dispatch.reform(move |_: bool| FormInput::Toggle(preference))}
                        />
                    }
                })}
            </div>
            <button type="button" class="btn" onclick={on_reset}>
                {bundle.text("settings.reset", "Reset to defaults")}
            </button>
        </section>
    }
}
