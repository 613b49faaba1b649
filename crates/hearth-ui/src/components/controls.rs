use crate::core::form::SelectOption;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct OptionSelectProps {
    pub label: AttrValue,
    pub options: Vec<SelectOption>,
    pub value: AttrValue,
    #[prop_or_default]
    pub onchange: Callback<String>,
}

#[function_component(OptionSelect)]
pub(crate) fn option_select(props: &OptionSelectProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                onchange.emit(target.value());
            }
        })
    };

    html! {
        <div class="setting">
            <label>
                {props.label.clone()}{": "}
                <select class="select" value={props.value.clone()} onchange={onchange}>
                    {for props.options.iter().map(|option| {
                        let selected = &*props.value == option.value;
                        html! {
                            <option value={option.value} selected={selected}>
                                {option.label.clone()}
                            </option>
                        }
                    })}
                </select>
            </label>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ToggleFieldProps {
    pub label: AttrValue,
    pub checked: bool,
    #[prop_or_default]
    pub onchange: Callback<bool>,
}

#[function_component(ToggleField)]
pub(crate) fn toggle_field(props: &ToggleFieldProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                onchange.emit(input.checked());
            }
        })
    };

    html! {
        <label class="label cursor-pointer gap-2">
            <input
                type="checkbox"
                class="checkbox"
                checked={props.checked}
                onchange={onchange}
            />
            <span>{props.label.clone()}</span>
        </label>
    }
}
