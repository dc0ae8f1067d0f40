//! Alert banners for error and info messages. Messages must be safe to render
//! and should never include credentials or codes.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Info,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700"
        }
        AlertKind::Info => {
            "rounded-lg border border-green-200 bg-green-50 px-4 py-3 text-sm text-green-700"
        }
    };

    view! { <div class=class role="alert">{message}</div> }
}
