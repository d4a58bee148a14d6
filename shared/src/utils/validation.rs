//! Common format checks used by request validation

use once_cell::sync::Lazy;
use regex::Regex;

// 9-digit SSN with optional separators, e.g. 123-45-6789 or 123456789
static SSN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3}-?\d{2}-?\d{4}$").unwrap());

/// Check if a string is a well-formed US social security number
pub fn is_valid_ssn(ssn: &str) -> bool {
    SSN_REGEX.is_match(ssn)
}

/// Check if a string is a 6-digit MFA code
pub fn is_valid_mfa_code(code: &str) -> bool {
    code.len() == 6 && code.chars().all(|c| c.is_ascii_digit())
}
