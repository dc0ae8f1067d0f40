//! Post-verification landing. The authenticated session itself is the
//! backend's concern; this screen only confirms the handoff and lets the
//! user sign out, which clears the stored identifier.

use crate::components::{Alert, AlertKind, AppShell, Button};
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let email = auth.identifier_or_default();

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto mt-10 space-y-6 text-center">
                <h1 class="text-2xl font-bold">"Welcome"</h1>
                <Alert
                    kind=AlertKind::Info
                    message=format!("You are signed in as {email}.")
                />
                <Button on:click=move |_| {
                    auth.clear_identifier();
                    navigate(paths::HOME, Default::default());
                }>"Sign out"</Button>
            </div>
        </AppShell>
    }
}
