//! Resend countdown for the one-time PIN screen. The timer is plain state
//! with an explicit `tick`; the route owns the scheduling and must stop
//! ticking once `tick` reports the countdown is over or the screen unmounts.

/// Seconds a user waits before a new code can be requested.
pub const RESEND_WAIT_SECS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            remaining: RESEND_WAIT_SECS,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// One elapsed second. Returns `true` while further ticks should be
    /// scheduled; at zero the counter stays put.
    pub fn tick(&mut self) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
        }
        self.remaining > 0
    }

    /// The resend affordance unlocks only when the counter reaches zero.
    pub fn resend_ready(&self) -> bool {
        self.remaining == 0
    }

    /// Zero-padded `MM:SS` as shown under the code inputs.
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::{Countdown, RESEND_WAIT_SECS};

    #[test]
    fn starts_at_the_full_wait() {
        let timer = Countdown::new();
        assert_eq!(timer.remaining(), 300);
        assert!(!timer.resend_ready());
    }

    #[test]
    fn each_tick_removes_one_second() {
        let mut timer = Countdown::new();
        for elapsed in 1..=RESEND_WAIT_SECS {
            timer.tick();
            assert_eq!(timer.remaining(), RESEND_WAIT_SECS - elapsed);
        }
        assert!(timer.resend_ready());
    }

    #[test]
    fn never_goes_below_zero() {
        let mut timer = Countdown::new();
        for _ in 0..RESEND_WAIT_SECS {
            timer.tick();
        }
        assert!(!timer.tick(), "no further ticks should be scheduled");
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn tick_reports_whether_to_reschedule() {
        let mut timer = Countdown::new();
        assert!(timer.tick());
        for _ in 0..RESEND_WAIT_SECS - 2 {
            timer.tick();
        }
        assert!(!timer.tick(), "reaching zero ends the schedule");
    }

    #[test]
    fn display_is_zero_padded_minutes_and_seconds() {
        let mut timer = Countdown::new();
        assert_eq!(timer.display(), "05:00");

        for _ in 0..(300 - 125) {
            timer.tick();
        }
        assert_eq!(timer.display(), "02:05");

        for _ in 0..(125 - 65) {
            timer.tick();
        }
        assert_eq!(timer.display(), "01:05");

        while timer.tick() {}
        assert_eq!(timer.display(), "00:00");
    }
}
