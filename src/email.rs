use once_cell::sync::Lazy;
use regex::Regex;

/// Decides whether an email address is acceptable for reader registration.
pub trait EmailValidator {
    fn is_valid(&self, email: &str) -> bool;
}

impl<F> EmailValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid(&self, email: &str) -> bool {
        self(email)
    }
}

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email pattern must compile")
});

/// Accepts `local@domain.tld` shaped addresses: a non-empty local part, a
/// single `@`, and a domain containing at least one dot.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternEmailValidator;

impl EmailValidator for PatternEmailValidator {
    fn is_valid(&self, email: &str) -> bool {
        EMAIL_PATTERN.is_match(email)
    }
}
