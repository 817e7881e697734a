use once_cell::sync::Lazy;
use regex::Regex;

static LONG_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]{11}$").unwrap());
static SHORT_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").unwrap());

/// Validate a phone number. An empty string is always accepted because every
/// phone field is optional. Mobile numbers must be 11 digits with an optional
/// leading `+`; work numbers additionally accept a 6-digit short form.
pub fn validate_number(number: &str, mobile: bool) -> bool {
    if number.is_empty() {
        return true;
    }
    if mobile {
        LONG_NUMBER.is_match(number)
    } else {
        LONG_NUMBER.is_match(number) || SHORT_NUMBER.is_match(number)
    }
}
