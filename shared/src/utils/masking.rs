//! Partial redaction of sensitive values before logging or display

/// Mask a social security number, keeping the last four digits
///
/// Accepts the value with or without separators; anything shorter than
/// four digits masks completely.
pub fn mask_ssn(ssn: &str) -> String {
    let digits: String = ssn.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 4 {
        format!("***-**-{}", &digits[digits.len() - 4..])
    } else {
        "***-**-****".to_string()
    }
}

/// Partially mask an email address
///
/// Keeps the first two characters of the local part and the full domain:
/// `jane.doe@example.com` becomes `ja***@example.com`. Addresses whose
/// local part is shorter than two characters are returned unchanged.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if local.len() >= 2 => {
            format!("{}***@{}", &local[..2], domain)
        }
        _ => email.to_string(),
    }
}
