//! Yew components for the settings page.

pub(crate) mod controls;
pub(crate) mod display_settings;
pub(crate) mod hooks;
pub(crate) mod page;
pub(crate) mod settings_form;
pub(crate) mod time_tracked;
