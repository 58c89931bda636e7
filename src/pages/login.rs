//! Login page: email + password, validated before anything leaves the page.

use leptos::prelude::*;

use super::{navigate_to, spawn};
use crate::config::{ClientConfig, LoginMode};
use crate::net::api;
use crate::state::form::{LOGIN_FAILED_FALLBACK, LoginFields, validate_login};

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let mode = config.login_mode;
    let endpoint = config.login_endpoint();
    let success_url = config.login_success_url.clone();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let form_action = endpoint.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        let fields = LoginFields { email: email.get_untracked(), password: password.get_untracked() };
        let request = match validate_login(&fields) {
            Ok(request) => request,
            Err(e) => {
                ev.prevent_default();
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);

        // Native mode lets the browser post the form and follow the redirect.
        if mode == LoginMode::Native {
            return;
        }
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);

        let endpoint = endpoint.clone();
        let success_url = success_url.clone();
        spawn(async move {
            match api::login(&endpoint, &request).await {
                Ok(()) => navigate_to(&success_url),
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    error.set(Some(e.user_message(LOGIN_FAILED_FALLBACK)));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"BeautyFlow"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form id="loginForm" class="login-form" action=form_action method="post" on:submit=on_submit>
                    <input
                        id="email"
                        name="email"
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        id="password"
                        name="password"
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Log in"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p id="errorMessage" class="login-message login-message--error">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
                <p class="login-card__footer">
                    "No account yet? " <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
