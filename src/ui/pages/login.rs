//! Login page component
//!
//! A standalone page for the login form.

use leptos::prelude::*;

use super::layout::AuthPageLayout;
use crate::ui::auth::LoginForm;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <AuthPageLayout>
            <div class="auth-card">
                <LoginForm />
            </div>
        </AuthPageLayout>
    }
}
