//! Auth feature module covering the credential submit, the one-time PIN
//! verify, and the identifier handoff between the two screens. It keeps
//! authentication logic out of the UI and must stay aligned with the backend
//! field names. This module touches security boundaries and must avoid
//! logging passwords or codes.
//!
//! Flow overview: login POSTs the credentials to the API root and, on
//! success, records the email for the PIN screen. Verify POSTs the
//! concatenated code together with that email to `/otp`.

pub(crate) mod client;
pub(crate) mod state;
pub(crate) mod types;
