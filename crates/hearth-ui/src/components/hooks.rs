use hearth_settings::{Settings, SettingsChange, SettingsStore};
use yew::prelude::*;

/// Current settings, re-rendering the caller whenever the store changes.
#[hook]
pub(crate) fn use_settings(store: &SettingsStore) -> Settings {
    let settings = use_state_eq(|| store.snapshot());
    {
        let settings = settings.clone();
        use_effect_with_deps(
            move |store: &SettingsStore| {
                settings.set(store.snapshot());
                let subscription =
                    store.subscribe(move |change: &SettingsChange| settings.set(change.current));
                move || drop(subscription)
            },
            store.clone(),
        );
    }
    *settings
}
