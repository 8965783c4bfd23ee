//! Phone number normalization helpers.

/// Number of trailing digits compared when matching phones. Dropping the area
/// code tolerates providers that report local vs. international formats.
pub const SUFFIX_LEN: usize = 7;

/// Strip a phone number down to its digits.
///
/// Returns `None` when the input is absent or contains no digits at all, so a
/// decorative string like `"call us!"` can never participate in matching.
pub fn raw_phone_number(phone: Option<&str>) -> Option<String> {
    let digits: String = phone?.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

/// The last `n` characters of a digit string, or the whole string when it is
/// shorter than `n`.
pub fn suffix(digits: &str, n: usize) -> &str {
    let start = digits.len().saturating_sub(n);
    &digits[start..]
}
