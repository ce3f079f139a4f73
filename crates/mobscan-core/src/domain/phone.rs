use serde::{Deserialize, Serialize};

pub const MOBILE_NUMBER_LEN: usize = 11;
pub const MOBILE_PREFIXES: [&str; 4] = ["010", "011", "012", "015"];

/// Keeps the ASCII digits of `raw`, in order.
pub fn normalize_digits(raw: &str) -> String {
    raw.chars().filter(|ch| ch.is_ascii_digit()).collect()
}

/// True when `digits` is an 11-digit number on one of the mobile prefixes.
pub fn is_valid_mobile(digits: &str) -> bool {
    if digits.len() != MOBILE_NUMBER_LEN {
        return false;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    MOBILE_PREFIXES
        .iter()
        .any(|prefix| digits.starts_with(prefix))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberCheck {
    pub input: String,
    pub digits: String,
    pub valid: bool,
}

pub fn check_number(raw: &str) -> NumberCheck {
    let digits = normalize_digits(raw);
    let valid = is_valid_mobile(&digits);
    NumberCheck {
        input: raw.to_string(),
        digits,
        valid,
    }
}
