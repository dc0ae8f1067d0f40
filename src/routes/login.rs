//! Credential entry route. Validates that both fields are filled, submits
//! once per click, and on success hands the email to the one-time PIN screen
//! and navigates there. A failed login is logged and returns the form to
//! idle; there is no retry limit and no backoff, the user just submits again.

use crate::components::{AppShell, Button, FieldError, Spinner};
use crate::features::auth::client;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::LoginRequest;
use crate::flow::credentials::{self, CredentialErrors};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::logging;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (field_errors, set_field_errors) = signal(CredentialErrors::default());

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move {
            let result = client::login(&request).await;
            result.map(|()| request.email)
        }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(submitted_email) => {
                    auth.set_identifier(submitted_email);
                    navigate(paths::OTP, Default::default());
                }
                // No user-facing message on login failure; the form simply
                // returns to idle for another attempt.
                Err(err) => logging::error!("Login error: {err}"),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        let errors = credentials::validate(&email_value, &password_value);
        set_field_errors.set(errors);
        if !errors.is_clean() {
            return;
        }

        login_action.dispatch(LoginRequest {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto mt-10 space-y-5" on:submit=on_submit>
                <div>
                    <label class="block mb-2 text-sm font-medium" for="email">
                        "Username"
                    </label>
                    <input
                        id="email"
                        type="text"
                        class="w-full p-3 text-black bg-white border border-gray-300 rounded-lg focus:outline-none focus:border-green-400"
                        autocomplete="username"
                        placeholder="Username"
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                    <FieldError message=Signal::derive(move || field_errors.get().email) />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium" for="password">
                        "Password"
                    </label>
                    <div class="relative">
                        <input
                            id="password"
                            type=move || if show_password.get() { "text" } else { "password" }
                            class="w-full p-3 pr-10 text-black bg-white border border-gray-300 rounded-lg focus:outline-none focus:border-green-400"
                            autocomplete="current-password"
                            placeholder="Password"
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                        <button
                            type="button"
                            class="absolute top-1/2 right-3 -translate-y-1/2 text-sm text-gray-600 cursor-pointer"
                            on:click=move |_| set_show_password.update(|shown| *shown = !*shown)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <FieldError message=Signal::derive(move || field_errors.get().password) />
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    {move || {
                        if login_action.pending().get() { "Logging in..." } else { "Log in" }
                    }}
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4 text-center"><Spinner /></div> })
                }}
            </form>
        </AppShell>
    }
}
