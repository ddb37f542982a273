//! Dashboard page, gated on a live session.
//!
//! On entry the page asks the service for the current user. No user means
//! an immediate redirect to the login route with no profile fetch; a user
//! means fetching the single profile row keyed by the identity reference
//! and rendering a greeting. A missing or unfetchable profile renders
//! placeholders, never an error.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Profile;
use crate::state::session::SessionState;
use crate::util::session_gate::should_redirect_unauth;

/// Greeting line; falls back to `"User"` when no profile row was found or
/// the row carries no name.
pub(crate) fn greeting(profile: Option<&Profile>) -> String {
    let name = profile
        .map(|p| p.full_name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("User");
    format!("Welcome, {name} 👋")
}

/// Location line; missing fields render empty rather than erroring.
pub(crate) fn location_line(profile: Option<&Profile>) -> String {
    let (city, country) = profile
        .map(|p| (p.city.as_str(), p.country.as_str()))
        .unwrap_or(("", ""));
    format!("Location: {city}, {country}")
}

/// Dashboard page, served at `/dashboard`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let profile = RwSignal::new(Option::<Profile>::None);
    let navigate = use_navigate();

    // Redirect to login once the session query resolves with no user.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if should_redirect_unauth(&session.get()) {
                navigate("/", NavigateOptions::default());
            }
        });
    }

    // Fresh session query on entry, then the profile fetch (browser only).
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            session.update(|s| s.loading = true);
            leptos::task::spawn_local(async move {
                let user = crate::net::api::current_user().await;
                let identity_ref = user.as_ref().map(|u| u.id.clone());
                session.update(|s| s.resolved(user));

                if let Some(id) = identity_ref {
                    if let Some(row) = crate::net::api::fetch_profile(&id).await {
                        profile.set(Some(row));
                    }
                }
            });
        }
    });

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                // Fire-and-forget: navigate regardless of the outcome.
                crate::net::api::sign_out().await;
                session.update(SessionState::signed_out);
                navigate("/", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>

            <div class="dashboard-page__card">
                <h2>{move || greeting(profile.get().as_ref())}</h2>
                <p>{move || location_line(profile.get().as_ref())}</p>
                <button class="btn btn--danger" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </div>
    }
}
