//! Maps the result of the verify request onto what the screen does next.
//!
//! The deployed backend answers every verify attempt with a 2xx and signals
//! nothing in the body, so the shipped flow treats a clean response as a
//! rejected code and a transport failure as "keep the digits, try again".
//! `Corrected` is the intended reading for a backend that returns real
//! statuses: 2xx advances, an error means the code was wrong.
//!
//! TODO: drop `Legacy` once the backend starts returning 4xx for bad codes.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyMode {
    /// Shipped behavior: a clean response is shown as "Invalid code".
    Legacy,
    /// Intended behavior: a clean response advances to the signed-in state.
    Corrected,
}

impl VerifyMode {
    pub fn from_flag(success_advances: bool) -> Self {
        if success_advances {
            Self::Corrected
        } else {
            Self::Legacy
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Verification accepted; hand off to the signed-in screen.
    Advance,
    /// Code rejected: show "Invalid code", clear every cell, focus the first.
    InvalidCode,
    /// Request failed in transit: log it, keep the digits, focus the first.
    TransportFailed,
}

pub fn resolve<T, E>(mode: VerifyMode, result: &Result<T, E>) -> VerifyOutcome {
    match (mode, result) {
        (VerifyMode::Legacy, Ok(_)) => VerifyOutcome::InvalidCode,
        (VerifyMode::Legacy, Err(_)) => VerifyOutcome::TransportFailed,
        (VerifyMode::Corrected, Ok(_)) => VerifyOutcome::Advance,
        (VerifyMode::Corrected, Err(_)) => VerifyOutcome::InvalidCode,
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve, VerifyMode, VerifyOutcome};
    use crate::flow::otp::OtpEntry;

    #[test]
    fn legacy_mode_rejects_a_clean_response() {
        let result: Result<(), &str> = Ok(());
        assert_eq!(
            resolve(VerifyMode::Legacy, &result),
            VerifyOutcome::InvalidCode
        );
    }

    #[test]
    fn legacy_mode_keeps_digits_on_transport_failure() {
        let result: Result<(), &str> = Err("connection refused");
        assert_eq!(
            resolve(VerifyMode::Legacy, &result),
            VerifyOutcome::TransportFailed
        );
    }

    #[test]
    fn corrected_mode_advances_on_a_clean_response() {
        let result: Result<(), &str> = Ok(());
        assert_eq!(
            resolve(VerifyMode::Corrected, &result),
            VerifyOutcome::Advance
        );
    }

    #[test]
    fn corrected_mode_shows_invalid_code_on_error() {
        let result: Result<(), &str> = Err("400 bad code");
        assert_eq!(
            resolve(VerifyMode::Corrected, &result),
            VerifyOutcome::InvalidCode
        );
    }

    #[test]
    fn mode_comes_from_the_config_flag() {
        assert_eq!(VerifyMode::from_flag(false), VerifyMode::Legacy);
        assert_eq!(VerifyMode::from_flag(true), VerifyMode::Corrected);
    }

    // The two rejection treatments, as the route applies them to the grid.

    #[test]
    fn invalid_code_treatment_resets_the_grid() {
        let mut entry = OtpEntry::new();
        for (index, digit) in ["1", "2", "3", "4", "5", "6"].iter().enumerate() {
            entry.set_digit(index, digit);
        }
        entry.reset();
        assert_eq!(entry.code(), "");
        assert_eq!(entry.focus(), 0);
    }

    #[test]
    fn transport_failure_treatment_keeps_the_grid() {
        let mut entry = OtpEntry::new();
        for (index, digit) in ["1", "2", "3", "4", "5", "6"].iter().enumerate() {
            entry.set_digit(index, digit);
        }
        entry.focus_first();
        assert_eq!(entry.code(), "123456");
        assert_eq!(entry.focus(), 0);
    }
}
