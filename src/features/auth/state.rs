//! Cross-screen auth state for the frontend. The only durable piece is the
//! identifier captured at login: it is handed to the PIN screen through this
//! context and mirrored to `localStorage` so a reload of `/otp` still knows
//! who is verifying. The password never enters this module.

use leptos::prelude::*;

/// `localStorage` key carrying the identifier between the two screens.
const IDENTIFIER_KEY: &str = "email";

#[derive(Clone, Copy)]
/// Auth flow context shared through Leptos.
pub struct AuthContext {
    pub identifier: RwSignal<Option<String>>,
}

impl AuthContext {
    fn new(identifier: RwSignal<Option<String>>) -> Self {
        Self { identifier }
    }

    /// Records the identifier after a successful login, persisting a copy so
    /// the PIN screen survives a reload.
    pub fn set_identifier(&self, value: String) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(IDENTIFIER_KEY, &value);
        }
        self.identifier.set(Some(value));
    }

    /// The identifier for the PIN screen: context first, persisted copy as a
    /// fallback, empty string when neither exists.
    pub fn identifier_or_default(&self) -> String {
        if let Some(value) = self.identifier.get_untracked() {
            return value;
        }
        local_storage()
            .and_then(|storage| storage.get_item(IDENTIFIER_KEY).ok())
            .flatten()
            .unwrap_or_default()
    }

    /// Forgets the identifier, in memory and in storage.
    pub fn clear_identifier(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(IDENTIFIER_KEY);
        }
        self.identifier.set(None);
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok()).flatten()
}

/// Provides the auth context and rehydrates the identifier once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let identifier = RwSignal::new(None);
    let auth = AuthContext::new(identifier);
    provide_context(auth);

    if let Some(stored) = local_storage()
        .and_then(|storage| storage.get_item(IDENTIFIER_KEY).ok())
        .flatten()
    {
        identifier.set(Some(stored));
    }

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let identifier = RwSignal::new(None);
        AuthContext::new(identifier)
    })
}
