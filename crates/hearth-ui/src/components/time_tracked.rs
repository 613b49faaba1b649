use gloo::console;
use hearth_tracker::TimeTracker;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TimeTrackedProps {
    /// Renders the wrapped view for the current elapsed count.
    pub render: Callback<u64, Html>,
    #[prop_or_default]
    pub tracker: TimeTracker,
}

/// Supplies seconds-since-mount to `render`; the timer lives exactly as long
/// as this component is mounted.
#[function_component(TimeTracked)]
pub(crate) fn time_tracked(props: &TimeTrackedProps) -> Html {
    let elapsed = use_state_eq(|| 0_u64);
    {
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |tracker: &TimeTracker| {
                elapsed.set(0);
                let mounted = match tracker.mount_with(move |value| elapsed.set(value)) {
                    Ok(mounted) => Some(mounted),
                    Err(err) => {
                        console::error!("time tracker failed to start", err.to_string());
                        None
                    }
                };
                move || drop(mounted)
            },
            props.tracker,
        );
    }
    props.render.emit(*elapsed)
}
