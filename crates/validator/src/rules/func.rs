//! Closure adapters
//!
//! Closures already implement [`Rule`], but a closure literal passed through a
//! generic `R: Rule<V>` parameter cannot have its return type inferred.
//! These helpers pin the signature at the call site.

use crate::foundation::{Rule, ValidationError};

/// Passes a closure through unchanged, fixing its signature as a rule.
///
/// # Examples
///
/// ```rust
/// use formguard_validator::foundation::ValidationError;
/// use formguard_validator::rules::rule_fn;
/// use formguard_validator::chain::RuleChain;
///
/// let chain = RuleChain::<str>::new().with_rule(rule_fn(|value: &str| {
///     if value == "admin" {
///         return Err(ValidationError::new("reserved", "That name is reserved."));
///     }
///     Ok(())
/// }));
/// assert!(!chain.is_valid("admin"));
/// ```
pub fn rule_fn<V, F>(f: F) -> F
where
    V: ?Sized,
    F: Fn(&V) -> Result<(), ValidationError> + Send + Sync,
{
    f
}

/// A rule built from a closure that returns the failure message, or `None`
/// when the value is acceptable.
#[derive(Clone, Copy)]
pub struct MessageFn<F> {
    f: F,
}

impl<F> std::fmt::Debug for MessageFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageFn").finish_non_exhaustive()
    }
}

impl<V, F> Rule<V> for MessageFn<F>
where
    V: ?Sized,
    F: Fn(&V) -> Option<String> + Send + Sync,
{
    fn check(&self, value: &V) -> Result<(), ValidationError> {
        match (self.f)(value) {
            Some(message) => Err(ValidationError::custom(message)),
            None => Ok(()),
        }
    }
}

/// Wraps a message-returning closure as a rule. Failures carry the code
/// `"custom"`.
///
/// # Examples
///
/// ```rust
/// use formguard_validator::foundation::Rule;
/// use formguard_validator::rules::message_fn;
///
/// let no_tabs = message_fn(|value: &str| {
///     value.contains('\t').then(|| "Field must not contain tabs.".to_string())
/// });
/// assert!(no_tabs.check("a\tb").is_err());
/// ```
pub fn message_fn<V, F>(f: F) -> MessageFn<F>
where
    V: ?Sized,
    F: Fn(&V) -> Option<String> + Send + Sync,
{
    MessageFn { f }
}
