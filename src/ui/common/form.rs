use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Text input with a leading icon addon
#[component]
pub fn IconInput(
    /// Label text above the input; omitted in compact layouts
    #[prop(default = None)]
    label: Option<&'static str>,
    /// Icon shown in the leading addon
    icon: &'static str,
    /// DOM `name` attribute
    name: &'static str,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Adds a trailing eye button that shows the value as plain text while set
    #[prop(optional)]
    reveal: Option<RwSignal<bool>>,
) -> impl IntoView {
    let current_type = move || {
        if reveal.is_some_and(|shown| shown.get()) {
            "text"
        } else {
            input_type
        }
    };

    view! {
        <div class="field">
            {label.map(|text| view! { <label class="form-label">{text}</label> })}
            <div class="input-group">
                <span class="input-group-text">
                    <Icon name=icon />
                </span>
                <input
                    type=current_type
                    name=name
                    class="form-control"
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                {reveal.map(|shown| view! {
                    <button
                        type="button"
                        class="input-group-text input-toggle"
                        title="Show or hide password"
                        on:click=move |_| shown.update(|v| *v = !*v)
                    >
                        {move || {
                            if shown.get() {
                                view! { <Icon name=icons::EYE_SLASH /> }.into_any()
                            } else {
                                view! { <Icon name=icons::EYE /> }.into_any()
                            }
                        }}
                    </button>
                })}
            </div>
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    /// Label text above the select; omitted in compact layouts
    #[prop(default = None)]
    label: Option<&'static str>,
    /// DOM `name` attribute
    name: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="field">
            {label.map(|text| view! { <label class="form-label">{text}</label> })}
            <select
                name=name
                class="form-select"
                prop:value=move || value.get()
                on:change=move |ev| {
                    let val = event_target_value(&ev);
                    on_change.run(val);
                }
            >
                {options.into_iter().map(|(val, text)| {
                    view! {
                        <option value=val>{text}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
