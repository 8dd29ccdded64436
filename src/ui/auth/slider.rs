//! Sliding auth card
//!
//! Shows the login and register forms side by side; the `active` class on the
//! card slides the register half into view. The card only tracks which half is
//! showing, each embedded form keeps its own state.

use leptos::prelude::*;

use super::{LoginForm, RegisterForm};
use crate::core::AuthPanel;

#[component]
pub fn AuthSlider() -> impl IntoView {
    let panel = RwSignal::new(AuthPanel::default());

    view! {
        <div class=move || panel.get().card_class()>
            <div class="auth-form login-form" aria-hidden=move || panel.get().is_register_active().to_string()>
                <LoginForm
                    compact=true
                    on_register_click=Callback::new(move |_: ()| panel.set(AuthPanel::Register))
                />
            </div>

            <div class="auth-form register-form" aria-hidden=move || (!panel.get().is_register_active()).to_string()>
                <RegisterForm
                    compact=true
                    on_login_click=Callback::new(move |_: ()| panel.set(AuthPanel::Login))
                />
            </div>
        </div>
    }
}
