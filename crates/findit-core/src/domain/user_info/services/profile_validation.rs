// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::user_info::models::ValidationResult;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid regex")
});
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{9,15}$").expect("Invalid regex"));

/// Checks the fields of a profile that must be well-formed before it may be saved.
pub fn validate_profile_fields(email: Option<&str>, phone: Option<&str>) -> ValidationResult {
    let email = email.map(str::trim).unwrap_or_default();
    let phone = phone.map(str::trim).unwrap_or_default();

    if email.is_empty() {
        return ValidationResult::Error("Email can't be empty.".to_string());
    }
    if !EMAIL_PATTERN.is_match(email) {
        return ValidationResult::Error("Please enter a valid email address.".to_string());
    }
    if phone.is_empty() {
        return ValidationResult::Error("Phone number can't be empty.".to_string());
    }
    if !PHONE_PATTERN.is_match(phone) {
        return ValidationResult::Error("Please enter a valid phone number.".to_string());
    }

    ValidationResult::Valid
}
