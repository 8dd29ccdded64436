use leptos::prelude::*;

use super::layout::AuthPageLayout;
use crate::ui::auth::AuthSlider;

/// Combined login/register page with the sliding card
#[component]
pub fn AuthPage() -> impl IntoView {
    view! {
        <AuthPageLayout>
            <div class="auth-slider-page">
                <AuthSlider />
            </div>
        </AuthPageLayout>
    }
}
