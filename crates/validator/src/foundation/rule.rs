//! The rule trait
//!
//! A rule is the single capability a chain composes: look at a value and
//! either accept it or describe what is wrong with it.

use crate::foundation::ValidationError;

/// A check over one value.
///
/// Rules are pure: they own their construction-time parameters and never
/// keep a reference to the chain or to a value they have checked. The
/// `Send + Sync` bound lets a fully built chain be shared between threads.
///
/// Any closure `Fn(&V) -> Result<(), ValidationError> + Send + Sync` is a
/// rule. A closure capturing `Rc` or `Cell` is rejected at compile time;
/// capture `Arc` and atomics or `Mutex` instead.
///
/// ```rust,compile_fail
/// use std::rc::Rc;
/// use formguard_validator::prelude::*;
///
/// let seen = Rc::new(std::cell::Cell::new(0));
/// let chain = StringRuleChain::new().with_rule(move |_: &str| {
///     seen.set(seen.get() + 1);
///     Ok(())
/// });
/// ```
///
/// # Examples
///
/// ```rust
/// use formguard_validator::foundation::{Rule, ValidationError};
///
/// struct NoSpaces;
///
/// impl Rule<str> for NoSpaces {
///     fn check(&self, value: &str) -> Result<(), ValidationError> {
///         if value.contains(' ') {
///             Err(ValidationError::new("no_spaces", "Field must not contain spaces."))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.check("alice").is_ok());
/// assert!(NoSpaces.check("a b").is_err());
/// ```
pub trait Rule<V: ?Sized>: Send + Sync {
    /// Returns `Err` with the failure message when `value` breaks the rule.
    fn check(&self, value: &V) -> Result<(), ValidationError>;
}

impl<V, F> Rule<V> for F
where
    V: ?Sized,
    F: Fn(&V) -> Result<(), ValidationError> + Send + Sync,
{
    #[inline]
    fn check(&self, value: &V) -> Result<(), ValidationError> {
        self(value)
    }
}
