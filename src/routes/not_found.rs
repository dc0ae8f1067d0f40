//! Minimalistic 404 page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders a minimal not-found page; used as the top-level route fallback.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4 space-y-4">
                <h1 class="text-6xl font-black text-gray-200 select-none">"404"</h1>
                <p class="text-xl font-bold">"Page not found"</p>
                <A
                    href="/"
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-green-700 rounded-lg hover:bg-green-800 transition"
                >
                    "Back to sign in"
                </A>
            </div>
        </AppShell>
    }
}
