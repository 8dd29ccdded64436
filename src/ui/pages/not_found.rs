//! Not found page component
//!
//! A 404 error page displayed when a route is not found, including the
//! "Forgot password?" link target, which has no page yet.

use leptos::prelude::*;
use leptos_router::components::A;

use super::layout::AuthPageLayout;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AuthPageLayout>
            <div class="not-found">
                // Error code
                <h1 class="not-found-code">"404"</h1>

                // Title
                <h2 class="not-found-title">"Page Not Found"</h2>

                // Description
                <p class="not-found-text">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                // Actions
                <div class="not-found-actions">
                    <A href="/login" attr:class="btn btn-primary">
                        "Go to Login"
                    </A>
                    <A href="/auth" attr:class="btn btn-outline">
                        "Login or Register"
                    </A>
                </div>
            </div>
        </AuthPageLayout>
    }
}
