//! Phone number normalization and masking.

use tracing::warn;

/// Normalize a raw phone entry to E.164 (+1234567890).
///
/// Handles US numbers: ten digits get a +1 prefix, eleven digits with a
/// leading 1 get a +, and inputs already carrying a + pass through.
/// Anything else is unrecognized.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 10 {
        Some(format!("+1{digits}"))
    } else if digits.len() == 11 && digits.starts_with('1') {
        Some(format!("+{digits}"))
    } else if raw.starts_with('+') {
        Some(raw.to_string())
    } else {
        warn!(digits = digits.len(), "unrecognized phone format");
        None
    }
}

/// Mask a phone number for log lines: first two and last four characters
/// visible, the rest elided. Counts characters, not bytes, so arbitrary
/// inbound text is safe to mask.
pub fn mask_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() < 7 {
        return "***".to_string();
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}***{tail}")
}
