//! Shared chrome for the auth pages: brand header, centered content, footer.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

#[component]
pub fn AuthPageLayout(children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            // Header
            <header class="auth-page-header">
                <A href="/login" attr:class="brand">
                    <Icon name=icons::SCALE class="brand-icon" />
                    <span class="brand-name">"Book My Advocate"</span>
                </A>
            </header>

            // Main content
            <main class="auth-page-main">
                {children()}
            </main>

            // Footer
            <footer class="auth-page-footer">
                <p>"© 2025 Book My Advocate. All rights reserved."</p>
            </footer>
        </div>
    }
}
