use crate::core::page::{current_time_text, time_spent_text};
use crate::i18n::TranslationBundle;
use js_sys::Date;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PageComponentProps {
    pub bundle: TranslationBundle,
    pub elapsed: u64,
}

#[function_component(PageComponent)]
pub(crate) fn page_component(props: &PageComponentProps) -> Html {
    let clock = String::from(Date::new_0().to_locale_time_string("default"));
    html! {
        <section class="page-component">
            <h2>{props.bundle.text("page.title", "Page Component")}</h2>
            <p>{current_time_text(&props.bundle, &clock)}</p>
            <p>{time_spent_text(&props.bundle, props.elapsed)}</p>
        </section>
    }
}
