//! Live input mask for CNJ process numbers.
//!
//! Called on every keystroke: whatever the user typed is reduced to its
//! digits and re-punctuated according to how many digits are present.

use super::CNJ_DIGITS;

/// Widths of the six CNJ fields, in display order.
const GROUPS: [usize; 6] = [7, 2, 4, 1, 2, 4];

/// Separator placed before each group after the first.
const SEPARATORS: [char; 5] = ['-', '.', '.', '.', '.'];

/// Removes every character that is not an ASCII digit.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Masks `raw` into the canonical `NNNNNNN-DD.AAAA.J.TR.OOOO` pattern.
///
/// Partial input yields a partial mask (`"00012345"` becomes `"0001234-5"`).
/// Digits beyond the twentieth are dropped.
pub fn format(raw: &str) -> String {
    let digits = digits_only(raw);
    let digits = &digits[..digits.len().min(CNJ_DIGITS)];

    let mut out = String::with_capacity(CNJ_DIGITS + SEPARATORS.len());
    let mut start = 0;
    for (idx, width) in GROUPS.iter().enumerate() {
        if start >= digits.len() {
            break;
        }
        if idx > 0 {
            out.push(SEPARATORS[idx - 1]);
        }
        let end = (start + width).min(digits.len());
        out.push_str(&digits[start..end]);
        start = end;
    }
    out
}
