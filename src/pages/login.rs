//! Login page with email/password form.
//!
//! One remote call: authenticate, then route on the result. On failure the
//! service message is shown verbatim and the user stays here. No local
//! session object is constructed; the dashboard re-queries session state
//! itself on entry.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// `<input type>` for a password field with a visibility toggle.
pub(crate) fn password_input_type(show: bool) -> &'static str {
    if show { "text" } else { "password" }
}

/// Label for the visibility toggle button.
pub(crate) fn toggle_label(show: bool) -> &'static str {
    if show { "Hide" } else { "Show" }
}

/// Login page, served at `/`.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let credentials = crate::net::types::Credentials {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            let navigate = navigate.clone();
            busy.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::authenticate(&credentials).await {
                    Ok(session) => {
                        crate::net::token::store(&session.access_token);
                        navigate("/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        busy.set(false);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    view! {
        <div class="auth-page auth-page--login">
            <aside class="auth-page__branding">
                <h1>"Welcome Back @ ShopSaaS"</h1>
                <p>"Sign in to continue your shopping experience"</p>
            </aside>

            <div class="auth-card">
                <h2 class="auth-card__title">"Login"</h2>
                <p class="auth-card__subtitle">"Enter your credentials to continue"</p>

                <form on:submit=on_submit>
                    <label class="field">
                        "Email"
                        <input
                            class="field__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        "Password"
                        <div class="field__password">
                            <input
                                class="field__input"
                                type=move || password_input_type(show_password.get())
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="field__toggle"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || toggle_label(show_password.get())}
                            </button>
                        </div>
                    </label>

                    {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

                    <button
                        type="submit"
                        class="btn btn--primary btn--block"
                        prop:disabled=move || busy.get()
                    >
                        "Login"
                    </button>
                </form>

                <p class="auth-card__switch">
                    "Don't have an account? " <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
