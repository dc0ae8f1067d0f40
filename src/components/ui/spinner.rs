use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-green-200 border-t-green-700"
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
