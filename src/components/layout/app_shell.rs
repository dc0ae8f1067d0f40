//! Shared layout wrapper with the bank header and content container. It
//! centralizes branding markup so routes can focus on content.

use crate::app_lib::build_info;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with the bank header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-white text-black">
            <header class="bg-green-800 text-white">
                <div class="max-w-screen-md flex items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-3">
                        <img src="/logo.svg" class="h-8" alt="Bankline" />
                        <span class="font-semibold whitespace-nowrap tracking-wide">
                            "MOBILE BANKING"
                        </span>
                    </A>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto px-6 pt-6">{children()}</div>
            </main>
            <footer class="py-4 text-center text-xs text-gray-400">
                {format!("build {}", build_info::git_commit_hash())}
            </footer>
        </div>
    }
}
