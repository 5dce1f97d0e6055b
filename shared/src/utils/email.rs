//! Email address utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Structural email address check. Deliverability is the transport's call;
// dispatch never rejects a recipient locally on this.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").unwrap()
});

/// Normalize an email address by trimming whitespace and lowercasing the domain part
pub fn normalize_email(email: &str) -> String {
    let trimmed = email.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => trimmed.to_string(),
    }
}

/// Check if an email address is structurally valid
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

/// Mask an email address for logging
///
/// Shows only the first character of the local part and the full domain.
///
/// # Example
///
/// ```ignore
/// let masked = mask_email("visitor@example.com");
/// assert_eq!(masked, "v******@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap();
            format!("{}{}@{}", first, "*".repeat(local.chars().count() - 1), domain)
        }
        Some((_, domain)) => format!("*@{}", domain),
        None => "*".repeat(email.chars().count()),
    }
}
