//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Nigerian mobile number, local (0...) or international (+234...) form
static NIGERIA_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\+234|0)[789][01]\d{8}$").unwrap()
});

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is a valid Nigerian mobile number
pub fn is_valid_phone_number(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    NIGERIA_MOBILE_REGEX.is_match(&normalized)
}

/// Mask a phone number for log output (e.g., 080****0752)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("080-9910-0752"), "08099100752");
        assert_eq!(normalize_phone_number("+234 809 910 0752"), "+2348099100752");
    }

    #[test]
    fn test_valid_local_numbers() {
        assert!(is_valid_phone_number("08099100752"));
        assert!(is_valid_phone_number("08020202020"));
        assert!(is_valid_phone_number("07012345678"));
        assert!(is_valid_phone_number("09112345678"));
    }

    #[test]
    fn test_valid_international_numbers() {
        assert!(is_valid_phone_number("+2348099100752"));
        assert!(is_valid_phone_number("+2347012345678"));
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(!is_valid_phone_number("12345"));
        assert!(!is_valid_phone_number("0099100752"));
        assert!(!is_valid_phone_number("+1415555266"));
        assert!(!is_valid_phone_number(""));
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("08099100752"), "080****0752");
        assert_eq!(mask_phone_number("123"), "****");
    }
}
