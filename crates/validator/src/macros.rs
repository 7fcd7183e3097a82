//! Macros for declaring rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`](crate::rule) — declare a rule struct, its `Rule` impl and a factory fn
//!
//! # Examples
//!
//! ```rust
//! use formguard_validator::foundation::{Rule, ValidationError};
//!
//! // Unit rule (no fields)
//! formguard_validator::rule! {
//!     pub NotBlank for str;
//!     rule(input) { !input.trim().is_empty() }
//!     error(input) { ValidationError::new("not_blank", "Field must not be blank.") }
//!     fn not_blank();
//! }
//!
//! // Struct with fields
//! formguard_validator::rule! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub StartsWithDigit { strict: bool } for str;
//!     rule(self, input) { !self.strict || input.starts_with(|c: char| c.is_ascii_digit()) }
//!     error(self, input) { ValidationError::new("starts_with_digit", "Field must start with a digit.") }
//!     fn starts_with_digit(strict: bool);
//! }
//!
//! assert!(not_blank().check("  ").is_err());
//! assert!(starts_with_digit(true).check("1a").is_ok());
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Declares a complete rule: struct definition, `Rule` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// `error` is only evaluated when `rule` returns `false`. Messages that
/// depend on fields belong in `new`, so every failure of one rule carries
/// the same text.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub HasNumber for str;
///     rule(input) { input.chars().any(|c| c.is_ascii_digit()) }
///     error(input) { ValidationError::new("has_number", "...") }
///     fn has_number();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// rule! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MaxWords { max: usize } for str;
///     rule(self, input) { input.split_whitespace().count() <= self.max }
///     error(self, input) { ValidationError::new("max_words", "Too many words.") }
///     fn max_words(max: usize);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// rule! {
///     pub MinLength { min: usize, message: Cow<'static, str> } for str;
///     rule(self, input) { input.chars().count() >= self.min }
///     error(self, input) { ValidationError::new("min_length", self.message.clone()) }
///     new(min: usize) { Self { min, message: format!("At least {min} characters.").into() } }
///     fn min_length(min: usize);
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Unit rule + factory fn ───────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Rule<$input> for $name {
            #[allow(unused_variables)]
            fn check(&self, $inp: &$input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            @struct
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            @struct
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Shared: struct definition + Rule impl ────────────────────────────
    (
        @struct
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $crate::foundation::Rule<$input> for $name {
            #[allow(unused_variables)]
            fn check(&$self_, $inp: &$input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}
