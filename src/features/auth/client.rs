//! Client wrappers for the banking auth endpoints. Neither endpoint returns a
//! body the frontend consumes; a clean response is all the UI gets to act on.

use crate::{
    app_lib::{post_json, AppError},
    features::auth::types::{LoginRequest, VerifyOtpRequest},
};

/// Submits the credential form. Success advances the flow to the PIN screen.
pub async fn login(request: &LoginRequest) -> Result<(), AppError> {
    post_json("/", request).await
}

/// Submits the one-time PIN together with the identifier captured at login.
pub async fn verify_otp(request: &VerifyOtpRequest) -> Result<(), AppError> {
    post_json("/otp", request).await
}
