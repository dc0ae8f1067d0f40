//! Inline per-field validation message, rendered directly under its input.

use leptos::prelude::*;

#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|text| view! { <p class="mt-1 text-sm text-red-500">{text}</p> })
    }
}
