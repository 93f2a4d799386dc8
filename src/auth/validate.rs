use lazy_static::lazy_static;
use regex::Regex;

/// Symbols a password may (and must, at least once) contain.
const PASSWORD_SYMBOLS: &str = "@$!%*?&";

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").unwrap();
    static ref PASSWORD_CHARSET_RE: Regex = Regex::new(r"^[A-Za-z0-9@$!%*?&]{8,}$").unwrap();
}

/// `local@domain.tld` where local-part and domain allow word characters,
/// dots and hyphens. No DNS or deliverability check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Minimum 8 characters with at least one lowercase, one uppercase, one
/// digit and one of `@$!%*?&`. Any character outside that alphabet makes
/// the whole password invalid.
pub fn is_strong_password(password: &str) -> bool {
    PASSWORD_CHARSET_RE.is_match(password)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}
