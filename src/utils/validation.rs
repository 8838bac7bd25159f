use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static LETTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z]").unwrap());
static DIGIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// At least eight characters, with at least one letter and one digit.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 8
        && LETTER_PATTERN.is_match(password)
        && DIGIT_PATTERN.is_match(password)
}

pub fn is_valid_birth_year(year: i32, current_year: i32) -> bool {
    (1900..=current_year).contains(&year)
}
