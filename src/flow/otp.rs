//! Six-cell one-time-PIN entry state. Each cell holds either nothing or a
//! single decimal digit, and an explicit focus index tells the rendering
//! layer which input should hold keyboard focus. The focus index is state,
//! not a DOM handle: moving it never fails and never touches the document.

/// Number of cells in a one-time PIN.
pub const OTP_LEN: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtpEntry {
    cells: [String; OTP_LEN],
    focus: usize,
}

impl OtpEntry {
    /// Fresh entry state: six empty cells, focus on the first.
    pub fn new() -> Self {
        Self {
            cells: Default::default(),
            focus: 0,
        }
    }

    pub fn cell(&self, index: usize) -> &str {
        &self.cells[index]
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Applies a keystroke to one cell. Only an empty string (deletion) or a
    /// single decimal digit is accepted; any other value is rejected with no
    /// state change, focus included. Accepting a digit before the last cell
    /// advances focus; the last cell keeps it.
    pub fn set_digit(&mut self, index: usize, value: &str) -> bool {
        if !accepts(value) {
            return false;
        }
        self.cells[index] = value.to_string();
        if !value.is_empty() && index < OTP_LEN - 1 {
            self.focus = index + 1;
        }
        true
    }

    /// Backspace pressed in a cell. When the cell is already empty the focus
    /// steps back so the user can delete across cells; clearing the value of
    /// a non-empty cell is the input control's own behavior, not ours.
    pub fn backspace(&mut self, index: usize) {
        if self.cells[index].is_empty() && index > 0 {
            self.focus = index - 1;
        }
    }

    /// Concatenates the cells into the submitted code. Unfilled cells
    /// contribute nothing; completeness is not enforced before submit.
    pub fn code(&self) -> String {
        self.cells.concat()
    }

    /// Clears every cell and returns focus to the first input, the treatment
    /// a rejected code receives.
    pub fn reset(&mut self) {
        self.cells = Default::default();
        self.focus = 0;
    }

    /// Returns focus to the first input without touching the digits, the
    /// treatment a transport failure receives.
    pub fn focus_first(&mut self) {
        self.focus = 0;
    }

    /// The user moved focus themselves (click or tab). The model follows the
    /// user; without this, a later notification would re-assert a stale
    /// index and yank the caret away from the cell being corrected.
    pub fn focus_to(&mut self, index: usize) {
        if index < OTP_LEN {
            self.focus = index;
        }
    }
}

/// A cell accepts the empty string or exactly one decimal digit.
fn accepts(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        None => true,
        Some(first) => first.is_ascii_digit() && chars.next().is_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::{OtpEntry, OTP_LEN};

    #[test]
    fn rejects_anything_but_one_optional_digit() {
        let mut entry = OtpEntry::new();
        for bad in ["a", "12", "1a", " ", "-", ".", "½", "١"] {
            assert!(!entry.set_digit(0, bad), "{bad:?} should be rejected");
            assert_eq!(entry.cell(0), "");
            assert_eq!(entry.focus(), 0, "focus must not move on reject");
        }
    }

    #[test]
    fn accepts_single_digits_and_empty() {
        let mut entry = OtpEntry::new();
        assert!(entry.set_digit(0, "7"));
        assert_eq!(entry.cell(0), "7");
        assert!(entry.set_digit(0, ""));
        assert_eq!(entry.cell(0), "");
    }

    #[test]
    fn auto_advances_until_last_cell() {
        let mut entry = OtpEntry::new();
        for index in 0..OTP_LEN - 1 {
            assert!(entry.set_digit(index, "1"));
            assert_eq!(entry.focus(), index + 1);
        }
        assert!(entry.set_digit(OTP_LEN - 1, "1"));
        assert_eq!(entry.focus(), OTP_LEN - 1, "no advance on the last cell");
    }

    #[test]
    fn deletion_does_not_advance() {
        let mut entry = OtpEntry::new();
        entry.set_digit(2, "4");
        assert_eq!(entry.focus(), 3);
        entry.set_digit(2, "");
        assert_eq!(entry.focus(), 3);
    }

    #[test]
    fn backspace_on_empty_cell_moves_back() {
        let mut entry = OtpEntry::new();
        entry.set_digit(0, "1");
        assert_eq!(entry.focus(), 1);
        entry.backspace(1);
        assert_eq!(entry.focus(), 0);
    }

    #[test]
    fn backspace_on_filled_cell_or_first_cell_keeps_focus() {
        let mut entry = OtpEntry::new();
        entry.set_digit(0, "1");
        entry.backspace(0);
        assert_eq!(entry.focus(), 1, "filled cell: value clearing is separate");

        let mut fresh = OtpEntry::new();
        fresh.backspace(0);
        assert_eq!(fresh.focus(), 0);
    }

    #[test]
    fn typing_a_full_code_one_digit_at_a_time() {
        let mut entry = OtpEntry::new();
        for (index, digit) in ["1", "2", "3", "4", "5", "6"].iter().enumerate() {
            assert!(entry.set_digit(index, digit));
        }
        assert_eq!(entry.code(), "123456");
        assert_eq!(entry.focus(), 5);
    }

    #[test]
    fn code_skips_unfilled_cells() {
        let mut entry = OtpEntry::new();
        entry.set_digit(0, "9");
        entry.set_digit(3, "2");
        assert_eq!(entry.code(), "92");
    }

    #[test]
    fn reset_clears_cells_and_focus() {
        let mut entry = OtpEntry::new();
        for index in 0..OTP_LEN {
            entry.set_digit(index, "8");
        }
        entry.reset();
        assert_eq!(entry, OtpEntry::new());
    }

    #[test]
    fn clicking_into_a_cell_moves_the_focus_model() {
        let mut entry = OtpEntry::new();
        entry.set_digit(0, "1");
        assert_eq!(entry.focus(), 1);
        entry.focus_to(4);
        assert_eq!(entry.focus(), 4);
        entry.focus_to(OTP_LEN);
        assert_eq!(entry.focus(), 4, "out-of-range focus is ignored");
    }

    #[test]
    fn correcting_a_clicked_cell_keeps_focus_there() {
        // Fill the grid, click back into cell 1, then clear it for a retype:
        // neither the backspace on a filled cell nor the deletion itself may
        // move focus back to the stale end-of-grid index.
        let mut entry = OtpEntry::new();
        for (index, digit) in ["1", "2", "3", "4", "5", "6"].iter().enumerate() {
            entry.set_digit(index, digit);
        }
        assert_eq!(entry.focus(), 5);

        entry.focus_to(1);
        entry.backspace(1);
        assert_eq!(entry.focus(), 1);
        assert!(entry.set_digit(1, ""));
        assert_eq!(entry.focus(), 1);
    }

    #[test]
    fn rejected_keystroke_in_a_clicked_cell_keeps_focus_there() {
        let mut entry = OtpEntry::new();
        for (index, digit) in ["1", "2", "3", "4", "5", "6"].iter().enumerate() {
            entry.set_digit(index, digit);
        }
        entry.focus_to(1);
        assert!(!entry.set_digit(1, "x"));
        assert_eq!(entry.focus(), 1);
    }

    #[test]
    fn focus_first_keeps_digits() {
        let mut entry = OtpEntry::new();
        entry.set_digit(0, "3");
        entry.set_digit(1, "1");
        entry.focus_first();
        assert_eq!(entry.focus(), 0);
        assert_eq!(entry.code(), "31");
    }
}
