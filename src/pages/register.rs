//! Registration page.
//!
//! Drives the signup state machine: local password validation, then the
//! two strictly sequential remote calls (create identity, insert profile).
//! The network phase operates on an immutable snapshot taken at submit
//! time, so in-flight requests are isolated from further edits.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::pages::login::{password_input_type, toggle_label};
use crate::state::signup::{RegisterForm, SignupState};

/// Registration page, served at `/register`.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());
    let show_password = RwSignal::new(false);
    let signup = RwSignal::new(SignupState::default());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let request = signup
                .try_update(|machine| machine.submit(&form.get_untracked()))
                .flatten();
            let Some(request) = request else { return };

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let created = match crate::net::api::create_identity(&request.credentials).await {
                    Ok(created) => created,
                    Err(e) => {
                        signup.update(|machine| machine.identity_failed(e.to_string()));
                        return;
                    }
                };
                if let Some(token) = &created.access_token {
                    crate::net::token::store(token);
                }

                let record = signup
                    .try_update(|machine| machine.identity_created(created.id, request.profile));
                let Some(record) = record else { return };

                match crate::net::api::insert_profile(&record).await {
                    Ok(()) => {
                        signup.update(SignupState::profile_created);
                        navigate("/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        // The identity created above stays behind; there is
                        // no compensating deletion.
                        signup.update(|machine| machine.profile_failed(e.to_string()));
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
        <div class="auth-page auth-page--register">
            <div class="auth-card">
                <h2 class="auth-card__title">"Create Account"</h2>
                <p class="auth-card__subtitle">"Start your journey with us"</p>

                <form on:submit=on_submit>
                    <label class="field">
                        "Email"
                        <input
                            class="field__input"
                            type="email"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        "Password"
                        <div class="field__password">
                            <input
                                class="field__input"
                                type=move || password_input_type(show_password.get())
                                prop:value=move || form.get().password
                                on:input=move |ev| {
                                    form.update(|f| f.password = event_target_value(&ev));
                                }
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

                    <hr class="auth-card__divider"/>

                    <label class="field">
                        "Full Name"
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || form.get().full_name
                            on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        "Age"
                        <input
                            class="field__input"
                            type="number"
                            prop:value=move || form.get().age
                            on:input=move |ev| form.update(|f| f.age = event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        "Gender"
                        <select
                            class="field__input"
                            prop:value=move || form.get().gender
                            on:change=move |ev| form.update(|f| f.gender = event_target_value(&ev))
                        >
                            <option value="">"Select gender"</option>
                            <option value="male">"Male"</option>
                            <option value="female">"Female"</option>
                            <option value="other">"Other"</option>
                        </select>
                    </label>

                    <label class="field">
                        "City"
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || form.get().city
                            on:input=move |ev| form.update(|f| f.city = event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        "State"
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || form.get().state
                            on:input=move |ev| form.update(|f| f.state = event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        "Country"
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || form.get().country
                            on:input=move |ev| form.update(|f| f.country = event_target_value(&ev))
                        />
                    </label>

                    {move || {
                        signup
                            .get()
                            .error
                            .map(|message| view! { <p class="form-error">{message}</p> })
                    }}

                    <button
                        type="submit"
                        class="btn btn--primary btn--block"
                        prop:disabled=move || signup.get().busy()
                    >
                        "Create Account"
                    </button>
                </form>

                <p class="auth-card__switch">
                    "Already have an account? " <A href="/">"Login"</A>
                </p>
            </div>
        </div>
    }
}
