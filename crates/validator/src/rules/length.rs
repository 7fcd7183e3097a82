//! String length rules
//!
//! Length is measured in Unicode scalar values (chars) so that a form field
//! holding `"héllo"` counts five characters, not six bytes.

use std::borrow::Cow;

use crate::foundation::ValidationError;

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::rule! {
    /// Rejects values shorter than `min`. A value of exactly `min` passes.
    ///
    /// The message is rendered once, in `new`.
    #[derive(PartialEq, Eq, Hash)]
    pub MinLength { min: usize, message: Cow<'static, str> } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) {
        ValidationError::new("min_length", self.message.clone())
            .with_param("min", self.min.to_string())
            .with_param("actual", input.chars().count().to_string())
    }
    new(min: usize) {
        Self { min, message: format!("Field must be at least {min} characters.").into() }
    }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::rule! {
    /// Rejects values longer than `max`. A value of exactly `max` passes.
    ///
    /// The message is rendered once, in `new`.
    #[derive(PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, message: Cow<'static, str> } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) {
        ValidationError::new("max_length", self.message.clone())
            .with_param("max", self.max.to_string())
            .with_param("actual", input.chars().count().to_string())
    }
    new(max: usize) {
        Self { max, message: format!("Field must be no more than {max} characters.").into() }
    }
    fn max_length(max: usize);
}

// ============================================================================
// TESTS
// ============================================================================
