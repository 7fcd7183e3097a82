//! Format rules
//!
//! Shape checks backed by regular expressions. These only look at the text;
//! `is_email` does not resolve the domain or contact a mail server.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{ChainError, Rule, ValidationError};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

// ============================================================================
// EMAIL
// ============================================================================

crate::rule! {
    /// Requires a `local@domain.tld` shape with a final label of at least two
    /// ASCII letters.
    pub IsEmail for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::new("email", "Invalid email format.") }
    fn is_email();
}

// ============================================================================
// MATCHES REGEX
// ============================================================================

/// Requires the value to match a caller-supplied pattern.
///
/// The pattern is compiled once, when the rule is built.
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    pattern: Regex,
    message: Cow<'static, str>,
}

impl MatchesRegex {
    /// Compiles `pattern`; `message` is reported when a value does not match.
    pub fn new(pattern: &str, message: impl Into<Cow<'static, str>>) -> Result<Self, ChainError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }

    /// The source pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Rule<str> for MatchesRegex {
    fn check(&self, value: &str) -> Result<(), ValidationError> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::new("pattern", self.message.clone())
                .with_param("pattern", self.pattern.as_str().to_string()))
        }
    }
}

/// Creates a [`MatchesRegex`] rule.
pub fn matches_regex(
    pattern: &str,
    message: impl Into<Cow<'static, str>>,
) -> Result<MatchesRegex, ChainError> {
    MatchesRegex::new(pattern, message)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com")]
    #[case("first.last+tag@sub.example.co")]
    #[case("a_b%c-d@host-name.org")]
    fn test_email_accepts(#[case] input: &str) {
        assert!(is_email().check(input).is_ok());
    }

    #[rstest]
    #[case("user@@example.com")]
    #[case("user@localhost")]
    #[case("plainstring")]
    #[case("@example.com")]
    #[case("user@example.c")]
    #[case("user@example.c0m")]
    #[case("us er@example.com")]
    #[case("")]
    fn test_email_rejects(#[case] input: &str) {
        let err = is_email().check(input).unwrap_err();
        assert_eq!(err.code, "email");
        assert_eq!(err.message, "Invalid email format.");
    }

    #[test]
    fn test_matches_regex() {
        let rule = matches_regex(r"^\d{3}-\d{4}$", "Use the 555-0100 format.").unwrap();
        assert_eq!(rule.pattern(), r"^\d{3}-\d{4}$");
        assert!(rule.check("123-4567").is_ok());

        let err = rule.check("invalid").unwrap_err();
        assert_eq!(err.message, "Use the 555-0100 format.");
        assert_eq!(err.param("pattern"), Some(r"^\d{3}-\d{4}$"));
    }

    #[test]
    fn test_matches_regex_invalid_pattern() {
        let result = matches_regex("(unclosed", "never shown");
        assert!(matches!(result, Err(ChainError::InvalidPattern(_))));
    }
}
