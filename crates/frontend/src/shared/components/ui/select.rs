use leptos::prelude::*;

/// Labelled select; the label and the control are siblings
#[component]
pub fn Select(
    /// ID for the select element, also the label's `for`
    id: &'static str,
    /// Label text, rendered bold
    label: &'static str,
    /// Accessible name of the control
    #[prop(optional)]
    aria_label: Option<&'static str>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    view! {
        <label for=id>
            <strong>{label}</strong>
        </label>
        <select
            id=id
            aria-label=aria_label
            on:change=move |ev| {
                if let Some(handler) = on_change {
                    handler.run(event_target_value(&ev));
                }
            }
        >
            <For
                each=move || options.get()
                key=|(val, _)| val.clone()
                children=move |(val, label)| {
                    let val_clone = val.clone();
                    let is_selected = move || value.get() == val_clone;
                    view! {
                        <option value=val selected=is_selected>
                            {label}
                        </option>
                    }
                }
            />
        </select>
    }
}
