//! Register form component
//!
//! Name, email, mobile, role and a confirmed password. All six inputs are
//! required and the two passwords must match.

use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::{AuthPanel, RegisterField, RegisterFormModel, Role};
use crate::ui::common::{ErrorMessage, IconInput, SelectField};
use crate::ui::icon::icons;

fn field_icon(field: RegisterField) -> &'static str {
    match field {
        RegisterField::Name | RegisterField::Role => icons::USER,
        RegisterField::Email => icons::ENVELOPE,
        RegisterField::Mobile => icons::PHONE,
        RegisterField::Password | RegisterField::ConfirmPassword => icons::LOCK,
    }
}

/// Register form component
#[component]
pub fn RegisterForm(
    /// Switches to the login form in place; without it the link opens `/login`
    #[prop(optional, into)]
    on_login_click: Option<Callback<()>>,
    /// Label-less layout used inside the sliding auth card
    #[prop(default = false)]
    compact: bool,
) -> impl IntoView {
    let form = RwSignal::new(RegisterFormModel::new());

    let error = Signal::derive(move || form.with(|f| f.error().map(|e| e.to_string())));

    let value_of = move |field: RegisterField| {
        Signal::derive(move || form.with(|f| f.state().get(field).to_string()))
    };
    let input_for = move |field: RegisterField| {
        Callback::new(move |value: String| form.update(|f| f.set_field(field, value)))
    };

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        form.update(|f| {
            if let Ok(state) = f.submit() {
                log!("Register data: {}", state.diagnostic());
            }
        });
    };

    let (title, subtitle) = if compact {
        ("Create Account", "Join Book My Advocate")
    } else {
        ("Book My Advocate", "Create your account")
    };

    let label = move |field: RegisterField| (!compact).then(|| field.label());
    let text_input = move |field: RegisterField| {
        let placeholder = if compact {
            field.short_label()
        } else {
            field.placeholder()
        };
        view! {
            <IconInput
                label=label(field)
                icon=field_icon(field)
                name=field.name()
                input_type=field.input_type()
                placeholder=placeholder
                value=value_of(field)
                on_input=input_for(field)
            />
        }
    };

    view! {
        <form on:submit=on_submit class="auth-form-body" novalidate=true>
            // Header
            <div class="auth-header">
                <h3 class="auth-title">{title}</h3>
                <p class="auth-subtitle">{subtitle}</p>
            </div>

            <ErrorMessage error=error />

            {text_input(RegisterField::Name)}
            {text_input(RegisterField::Email)}
            {text_input(RegisterField::Mobile)}

            <SelectField
                label=label(RegisterField::Role)
                name=RegisterField::Role.name()
                value=value_of(RegisterField::Role)
                on_change=input_for(RegisterField::Role)
                options=Role::select_options()
            />

            {text_input(RegisterField::Password)}
            {text_input(RegisterField::ConfirmPassword)}

            <button type="submit" class="btn btn-primary">
                "Register"
            </button>

            // Login link
            <p class="switch-text">
                "Already have an account? "
                {match on_login_click {
                    Some(callback) => view! {
                        <button
                            type="button"
                            class="auth-link"
                            on:click=move |_| callback.run(())
                        >
                            "Login"
                        </button>
                    }
                    .into_any(),
                    None => view! {
                        <A href=AuthPanel::Login.route() attr:class="auth-link">
                            "Login"
                        </A>
                    }
                    .into_any(),
                }}
            </p>
        </form>
    }
}
