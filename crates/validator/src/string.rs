//! String rule builders
//!
//! [`StringRuleChain`] is `RuleChain<str>` with one builder per built-in
//! string rule. Each builder appends exactly one rule and hands the chain
//! back, so calls compose in any order, any number of times.

use std::borrow::Cow;

use crate::chain::RuleChain;
use crate::foundation::ChainError;
use crate::rules;

/// A chain over string values.
pub type StringRuleChain = RuleChain<str>;

impl RuleChain<str> {
    /// Rejects values with fewer than `min` characters.
    pub fn min_length(self, min: usize) -> Self {
        self.with_rule(rules::min_length(min))
    }

    /// Rejects values with more than `max` characters.
    pub fn max_length(self, max: usize) -> Self {
        self.with_rule(rules::max_length(max))
    }

    /// Requires at least one `A`-`Z`.
    pub fn has_uppercase(self) -> Self {
        self.with_rule(rules::has_uppercase())
    }

    /// Requires at least one `a`-`z`.
    pub fn has_lowercase(self) -> Self {
        self.with_rule(rules::has_lowercase())
    }

    /// Requires at least one `0`-`9`.
    pub fn has_number(self) -> Self {
        self.with_rule(rules::has_number())
    }

    /// Requires at least one character from [`rules::SYMBOLS`].
    pub fn has_symbol(self) -> Self {
        self.with_rule(rules::has_symbol())
    }

    /// Requires a `local@domain.tld` shape.
    pub fn is_email(self) -> Self {
        self.with_rule(rules::is_email())
    }

    /// Requires a match against `pattern`, reporting `message` otherwise.
    pub fn matches_regex(
        self,
        pattern: &str,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<Self, ChainError> {
        Ok(self.with_rule(rules::matches_regex(pattern, message)?))
    }
}
