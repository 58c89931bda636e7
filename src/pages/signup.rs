//! Signup page with live password hint and JSON submission.

use leptos::prelude::*;

use super::{navigate_to, spawn};
use crate::config::ClientConfig;
use crate::net::api;
use crate::state::form::{
    NameFields, SIGNUP_FAILED_FALLBACK, SignupFields, ValidationError, length_message_visible, listed_signup_errors,
    validate_signup,
};

/// Input signals of the signup form.
#[derive(Clone, Copy)]
struct SignupInputs {
    username: RwSignal<String>,
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    password: RwSignal<String>,
    confirm: RwSignal<String>,
}

impl SignupInputs {
    fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            confirm: RwSignal::new(String::new()),
        }
    }

    fn snapshot(self, full_name: bool) -> SignupFields {
        let name = if full_name {
            NameFields::FullName {
                first_name: self.first_name.get_untracked(),
                last_name: self.last_name.get_untracked(),
            }
        } else {
            NameFields::Username(self.username.get_untracked())
        };
        SignupFields {
            name,
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm.get_untracked(),
        }
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let endpoint = config.signup_endpoint();
    let success_url = config.signup_success_url.clone();
    let min_len = config.min_password_len;
    let full_name = config.signup_full_name;

    let inputs = SignupInputs::new();
    let errors = RwSignal::new(Vec::<String>::new());
    let length_failed = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let request = match validate_signup(&inputs.snapshot(full_name), min_len) {
            Ok(request) => request,
            Err(failures) => {
                length_failed.set(failures.contains(&ValidationError::PasswordTooShort(min_len)));
                errors.set(listed_signup_errors(&failures));
                return;
            }
        };
        length_failed.set(false);
        errors.set(Vec::new());
        busy.set(true);

        let endpoint = endpoint.clone();
        let success_url = success_url.clone();
        spawn(async move {
            match api::signup(&endpoint, &request).await {
                Ok(()) => navigate_to(&success_url),
                Err(e) => {
                    leptos::logging::warn!("signup failed: {e}");
                    errors.set(vec![e.user_message(SIGNUP_FAILED_FALLBACK)]);
                    busy.set(false);
                }
            }
        });
    };

    let show_length = move || inputs.password.with(|p| length_message_visible(p, min_len, length_failed.get()));

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create your account"</h1>
                <form id="signupForm" class="login-form" on:submit=on_submit>
                    {if full_name {
                        view! {
                            <TextField id="first-name" placeholder="First name" value=inputs.first_name/>
                            <TextField id="last-name" placeholder="Last name" value=inputs.last_name/>
                        }
                            .into_any()
                    } else {
                        view! { <TextField id="username" placeholder="Username" value=inputs.username/> }.into_any()
                    }}
                    <TextField id="email" kind="email" placeholder="you@example.com" value=inputs.email/>
                    <TextField id="phone" placeholder="Phone (optional)" value=inputs.phone/>
                    <TextField id="password" kind="password" placeholder="Password" value=inputs.password/>
                    <Show when=show_length>
                        <p id="password-error" class="login-message login-message--hint">
                            {ValidationError::PasswordTooShort(min_len).to_string()}
                        </p>
                    </Show>
                    <TextField
                        id="confirm-password"
                        kind="password"
                        placeholder="Confirm password"
                        value=inputs.confirm
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <ErrorList messages=errors/>
                <p class="login-card__footer">
                    "Already registered? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}

#[component]
fn TextField(
    id: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <input
            id=id
            class="login-input"
            type=kind
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
fn ErrorList(messages: RwSignal<Vec<String>>) -> impl IntoView {
    view! {
        <div id="error-message">
            {move || {
                messages
                    .get()
                    .into_iter()
                    .map(|message| view! { <p class="login-message login-message--error">{message}</p> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
