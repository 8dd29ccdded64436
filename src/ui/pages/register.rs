//! Register page component
//!
//! A standalone page for the registration form.

use leptos::prelude::*;

use super::layout::AuthPageLayout;
use crate::ui::auth::RegisterForm;

/// Register page component
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <AuthPageLayout>
            <div class="auth-card">
                <RegisterForm />
            </div>
        </AuthPageLayout>
    }
}
