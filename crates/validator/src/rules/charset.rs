//! Character-class presence rules
//!
//! Each rule passes as soon as one qualifying character is present.
//! The classes are ASCII-only: `É` is not an uppercase letter here and `٣`
//! is not a number.

use crate::foundation::ValidationError;

/// The fixed symbol set accepted by [`HasSymbol`].
pub const SYMBOLS: &str = "!@#$%^&*()_+={}[]:;\"'<>,.?/`~-";

crate::rule! {
    /// Requires at least one ASCII uppercase letter (`A`-`Z`).
    pub HasUppercase for str;
    rule(input) { input.chars().any(|c| c.is_ascii_uppercase()) }
    error(input) {
        ValidationError::new(
            "has_uppercase",
            "Field must contain at least one uppercase letter.",
        )
    }
    fn has_uppercase();
}

crate::rule! {
    /// Requires at least one ASCII lowercase letter (`a`-`z`).
    pub HasLowercase for str;
    rule(input) { input.chars().any(|c| c.is_ascii_lowercase()) }
    error(input) {
        ValidationError::new(
            "has_lowercase",
            "Field must contain at least one lowercase letter.",
        )
    }
    fn has_lowercase();
}

crate::rule! {
    /// Requires at least one ASCII digit (`0`-`9`).
    pub HasNumber for str;
    rule(input) { input.chars().any(|c| c.is_ascii_digit()) }
    error(input) { ValidationError::new("has_number", "Field must contain at least one number.") }
    fn has_number();
}

crate::rule! {
    /// Requires at least one character from [`SYMBOLS`].
    pub HasSymbol for str;
    rule(input) { input.chars().any(|c| SYMBOLS.contains(c)) }
    error(input) { ValidationError::new("has_symbol", "Field must contain at least one symbol.") }
    fn has_symbol();
}
