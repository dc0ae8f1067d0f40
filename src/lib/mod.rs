//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Sign-in flow
//!
//! 1. **Credentials:** The client POSTs `{email, password}` to the API root.
//!    On success the email is kept for the next screen and the router moves
//!    to `/otp`.
//! 2. **One-time PIN:** The client POSTs `{otp, email}` to `/otp` while a
//!    resend countdown runs. How a clean response is interpreted is governed
//!    by the `verify_success_advances` configuration switch; see
//!    `flow::verify`.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must avoid logging
//! passwords or codes.

// Only the request helpers need a browser; config, errors, and build
// metadata compile (and test) on any target.
#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::post_json;
pub(crate) use errors::AppError;
