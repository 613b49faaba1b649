use crate::components::display_settings::DisplaySettings;
use crate::components::hooks::use_settings;
use crate::components::page::PageComponent;
use crate::components::settings_form::SettingsForm;
use crate::components::time_tracked::TimeTracked;
use crate::core::theme::DocumentAttributes;
use crate::i18n::TranslationBundle;
use gloo::utils::{document, window};
use hearth_settings::Settings;
use yew::prelude::*;

mod preferences;

#[function_component(HearthApp)]
pub(crate) fn hearth_app() -> Html {
    let store = use_memo(|_| preferences::initialize_store(), ());
    let settings = use_settings(&store);
    let bundle = use_memo(|language| TranslationBundle::new(*language), settings.language);

    use_effect_with_deps(
        |settings: &Settings| {
            apply_document_attributes(&DocumentAttributes::from_settings(settings));
            || ()
        },
        settings,
    );

    let render_page = {
        let bundle = (*bundle).clone();
        Callback::from(move |elapsed: u64| {
            html! { <PageComponent bundle={bundle.clone()} {elapsed} /> }
        })
    };

    html! {
        <div class="app-container">
            <SettingsForm
                store={(*store).clone()}
                {settings}
                bundle={(*bundle).clone()}
            />
            <TimeTracked render={render_page} />
            <DisplaySettings {settings} bundle={(*bundle).clone()} />
        </div>
    }
}

fn apply_document_attributes(attributes: &DocumentAttributes) {
    if let Some(document) = window().document() {
        if let Some(body) = document.body() {
            let _ = body.set_attribute("data-theme", attributes.theme);
        }
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("lang", &attributes.lang);
        }
    }
}

/// Mount the app into `#root`, or the document body when it is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<HearthApp>::with_root(root).render();
    } else {
        yew::Renderer::<HearthApp>::new().render();
    }
}
