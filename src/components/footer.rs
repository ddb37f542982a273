//! Page footer.

use leptos::prelude::*;

/// Footer shown below every routed page.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© 2026 ShopSaaS. All rights reserved."</p>
        </footer>
    }
}
