use super::error::AuthError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NAME_RE: Regex = Regex::new(r"^[A-Za-z]+$").unwrap();
    static ref MOBILE_RE: Regex = Regex::new(r"^\d{10}$").unwrap();
    // 仅接受gmail域(站点策略)
    static ref GMAIL_RE: Regex = Regex::new(r"^[^\s@]+@gmail\.com$").unwrap();
}

pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 100;

pub fn validate_name(username: &str) -> Result<(), AuthError> {
    if NAME_RE.is_match(username) {
        Ok(())
    } else {
        Err(AuthError::InvalidName)
    }
}

pub fn validate_mobile(mobile: &str) -> Result<(), AuthError> {
    if MOBILE_RE.is_match(mobile) {
        Ok(())
    } else {
        Err(AuthError::InvalidMobile)
    }
}

pub fn validate_email_domain(email: &str) -> Result<(), AuthError> {
    if GMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(AuthError::InvalidEmailDomain)
    }
}

/// 收集密码违反的所有子规则，而不是只报第一条
pub fn password_violations(password: &str) -> Vec<String> {
    let mut violations = Vec::new();

    let len = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        violations.push(format!(
            "between {} and {} characters",
            PASSWORD_MIN_LEN, PASSWORD_MAX_LEN
        ));
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        violations.push("at least one letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push("at least one digit".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push("at least one uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        violations.push("at least one lowercase letter".to_string());
    }

    violations
}

pub fn validate_password(password: &str) -> Result<(), AuthError> {
    let violations = password_violations(password);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(AuthError::WeakPassword(violations))
    }
}
