//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Loose North-American phone number pattern: optional +1 country code,
// optional separators and area-code parentheses.
static NA_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?1?[-.\s]?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}$").unwrap()
});

/// Normalize a phone number to its 10 significant digits
///
/// Strips all non-digit characters and keeps the last 10 digits, so
/// "+1 (555) 123-4567" and "555.123.4567" both normalize to "5551234567".
pub fn normalize_phone_number(phone: &str) -> String {
    let digits: Vec<char> = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    let start = digits.len().saturating_sub(10);
    digits[start..].iter().collect()
}

/// Check if a phone number matches the loose North-American pattern
pub fn is_valid_na_phone(phone: &str) -> bool {
    NA_PHONE_REGEX.is_match(phone)
}

/// Mask a phone number for display (e.g., ***-***-4567)
///
/// Only the last four digits of the normalized number survive.
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 4 {
        format!("***-***-{}", &normalized[normalized.len() - 4..])
    } else {
        "***-***-****".to_string()
    }
}
