//! Login form component
//!
//! Email and password inputs with a password visibility toggle. Submission is
//! validated locally and, when accepted, only logged.

use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::{AuthPanel, LoginField, LoginFormModel};
use crate::ui::common::{ErrorMessage, IconInput};
use crate::ui::icon::icons;

/// Login form component
#[component]
pub fn LoginForm(
    /// Switches to the register form in place; without it the link opens `/register`
    #[prop(optional, into)]
    on_register_click: Option<Callback<()>>,
    /// Label-less layout used inside the sliding auth card
    #[prop(default = false)]
    compact: bool,
) -> impl IntoView {
    let form = RwSignal::new(LoginFormModel::new());
    let show_password = RwSignal::new(false);

    let error = Signal::derive(move || form.with(|f| f.error().map(|e| e.to_string())));

    let value_of = move |field: LoginField| {
        Signal::derive(move || form.with(|f| f.state().get(field).to_string()))
    };
    let input_for = move |field: LoginField| {
        Callback::new(move |value: String| form.update(|f| f.set_field(field, value)))
    };

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        form.update(|f| {
            if let Ok(state) = f.submit() {
                log!("Login data: {}", state.diagnostic());
            }
        });
    };

    let (title, subtitle) = if compact {
        ("Welcome Back", "Login to your account")
    } else {
        ("Book My Advocate", "Login to your legal account")
    };
    let label = move |field: LoginField| (!compact).then(|| field.label());
    let placeholder = move |field: LoginField| {
        if compact {
            field.short_label()
        } else {
            field.placeholder()
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

            <IconInput
                label=label(LoginField::Email)
                icon=icons::ENVELOPE
                name=LoginField::Email.name()
                input_type=LoginField::Email.input_type()
                placeholder=placeholder(LoginField::Email)
                value=value_of(LoginField::Email)
                on_input=input_for(LoginField::Email)
            />

            <IconInput
                label=label(LoginField::Password)
                icon=icons::LOCK
                name=LoginField::Password.name()
                input_type=LoginField::Password.input_type()
                placeholder=placeholder(LoginField::Password)
                value=value_of(LoginField::Password)
                on_input=input_for(LoginField::Password)
                reveal=show_password
            />

            {(!compact).then(|| view! {
                <div class="auth-row-end">
                    <A href="/forgot-password" attr:class="auth-link">
                        "Forgot password?"
                    </A>
                </div>
            })}

            <button type="submit" class="btn btn-primary">
                "Login"
            </button>

            // Register link
            <p class="switch-text">
                "Don't have an account? "
                {match on_register_click {
                    Some(callback) => view! {
                        <button
                            type="button"
                            class="auth-link"
                            on:click=move |_| callback.run(())
                        >
                            "Register"
                        </button>
                    }
                    .into_any(),
                    None => view! {
                        <A href=AuthPanel::Register.route() attr:class="auth-link">
                            "Register"
                        </A>
                    }
                    .into_any(),
                }}
            </p>
        </form>
    }
}
