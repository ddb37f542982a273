//! Top navigation bar with the brand and auth links.

use leptos::prelude::*;
use leptos_router::components::A;

/// Navbar shown above every routed page.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="navbar">
            <div class="navbar__brand">
                <span class="navbar__logo" aria-hidden="true">"🛍"</span>
                <span class="navbar__title">"ShopSaaS"</span>
            </div>
            <nav class="navbar__links">
                <A href="/" attr:class="navbar__link">"Login"</A>
                <A href="/register" attr:class="navbar__link navbar__link--primary">"Register"</A>
            </nav>
        </header>
    }
}
