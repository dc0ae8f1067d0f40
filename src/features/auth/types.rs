//! Request payloads for the banking auth API. Field names match what the
//! backend expects and must not be renamed; these payloads carry credentials
//! and codes, so they must never be logged.

use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct VerifyOtpRequest {
    pub otp: String,
    pub email: String,
}
