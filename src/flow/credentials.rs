//! Credential-form validation. Both fields are merely required to be
//! non-empty; everything else is the backend's call. Validation failures stay
//! local to the form and are never sent over the wire.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CredentialErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl CredentialErrors {
    pub fn is_clean(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn validate(email: &str, password: &str) -> CredentialErrors {
    CredentialErrors {
        email: email.trim().is_empty().then_some("Email is required"),
        password: password.trim().is_empty().then_some("Password is required"),
    }
}
