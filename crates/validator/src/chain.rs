//! Rule chains
//!
//! A [`RuleChain`] holds an ordered, append-only list of rules for one value
//! type and applies them under an [`EvaluationPolicy`]:
//!
//! ```rust
//! use formguard_validator::prelude::*;
//!
//! let password = StringRuleChain::new().min_length(8).has_uppercase().has_number();
//!
//! let outcome = password.evaluate("abc");
//! assert_eq!(
//!     outcome.messages(),
//!     vec![
//!         "Field must be at least 8 characters.",
//!         "Field must contain at least one uppercase letter.",
//!         "Field must contain at least one number.",
//!     ]
//! );
//! assert!(password.evaluate("Abcdefg1").is_valid());
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::foundation::{ChainConfig, EvaluationPolicy, Rule, ValidationError, ValidationErrors};

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of evaluating a chain against one value.
///
/// The variant mirrors the policy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Accumulate-all: every failure, in rule order. Empty means valid.
    All(ValidationErrors),
    /// Fail-fast: the first failure, or `None` when every rule passed.
    First(Option<ValidationError>),
}

impl Outcome {
    /// True when no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Self::All(errors) => errors.is_empty(),
            Self::First(error) => error.is_none(),
        }
    }

    /// The policy that produced this outcome.
    #[must_use]
    pub fn policy(&self) -> EvaluationPolicy {
        match self {
            Self::All(_) => EvaluationPolicy::AccumulateAll,
            Self::First(_) => EvaluationPolicy::FailFast,
        }
    }

    /// Reported errors, in rule order. At most one under fail-fast.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::All(errors) => errors.errors(),
            Self::First(error) => error.as_slice(),
        }
    }

    /// Reported messages, in rule order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.errors().iter().map(|e| e.message.as_ref()).collect()
    }

    /// The first reported message, if any.
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        self.errors().first().map(|e| e.message.as_ref())
    }

    /// Converts into a `Result`, `Err` holding every reported error.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        match self {
            Self::All(errors) => errors.into_result(()),
            Self::First(error) => error.into_iter().collect::<ValidationErrors>().into_result(()),
        }
    }
}

// ============================================================================
// RULE CHAIN
// ============================================================================

/// An ordered, append-only sequence of rules over values of type `V`.
///
/// Insertion order is evaluation order. Rules are never removed, reordered or
/// replaced; [`add_rule`](Self::add_rule) may still be called after the chain
/// has been used. Build the chain fully before sharing it: `&RuleChain` is
/// `Sync`, mutation needs `&mut`.
pub struct RuleChain<V: ?Sized> {
    rules: Vec<Box<dyn Rule<V>>>,
    policy: EvaluationPolicy,
    field: Option<Cow<'static, str>>,
}

impl<V: ?Sized> Default for RuleChain<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ?Sized> fmt::Debug for RuleChain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleChain")
            .field("rules", &self.rules.len())
            .field("policy", &self.policy)
            .field("field", &self.field)
            .finish()
    }
}

impl<V: ?Sized> RuleChain<V> {
    /// Creates an empty accumulate-all chain.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(EvaluationPolicy::default())
    }

    /// Creates an empty chain with an explicit policy.
    #[must_use]
    pub fn with_policy(policy: EvaluationPolicy) -> Self {
        Self {
            rules: Vec::new(),
            policy,
            field: None,
        }
    }

    /// Creates an empty chain from configuration.
    #[must_use]
    pub fn from_config(config: ChainConfig) -> Self {
        let chain = Self::with_policy(config.policy);
        match config.field {
            Some(field) => chain.for_field(field),
            None => chain,
        }
    }

    /// Creates a chain pre-seeded with `rules`, kept in iteration order.
    #[must_use]
    pub fn with_rules<I>(policy: EvaluationPolicy, rules: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Rule<V>>>,
    {
        Self {
            rules: rules.into_iter().collect(),
            policy,
            field: None,
        }
    }

    /// Names the form field; the name is stamped onto every reported error
    /// that does not already carry one.
    #[must_use = "builder methods must be chained or built"]
    pub fn for_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Appends `rule` to the end of the chain.
    pub fn add_rule<R>(&mut self, rule: R) -> &mut Self
    where
        R: Rule<V> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends `rule` and returns the chain, for by-value building.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule<R>(mut self, rule: R) -> Self
    where
        R: Rule<V> + 'static,
    {
        self.add_rule(rule);
        self
    }

    /// The chain's policy.
    #[must_use]
    pub fn policy(&self) -> EvaluationPolicy {
        self.policy
    }

    /// The field name, if one was set.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the chain has no rules; every value is then valid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs the rules against `value` under the chain's policy.
    ///
    /// A rule that panics propagates the panic to the caller; the chain
    /// itself is left untouched and stays usable.
    pub fn evaluate(&self, value: &V) -> Outcome {
        self.evaluate_with(value, self.policy)
    }

    /// Runs the rules against `value` under `policy`, ignoring the chain's own.
    pub fn evaluate_with(&self, value: &V, policy: EvaluationPolicy) -> Outcome {
        tracing::trace!(
            rules = self.rules.len(),
            %policy,
            field = ?self.field,
            "evaluating rule chain"
        );

        let outcome = match policy {
            EvaluationPolicy::AccumulateAll => Outcome::All(self.collect_all(value)),
            EvaluationPolicy::FailFast => Outcome::First(self.first_failure(value)),
        };

        if !outcome.is_valid() {
            tracing::debug!(
                failures = outcome.errors().len(),
                %policy,
                field = ?self.field,
                "value rejected"
            );
        }
        outcome
    }

    /// Runs every rule and collects every failure, in rule order.
    pub fn collect_all(&self, value: &V) -> ValidationErrors {
        self.rules
            .iter()
            .filter_map(|rule| rule.check(value).err())
            .map(|error| self.stamp(error))
            .collect()
    }

    /// Runs rules until one fails and returns that failure.
    pub fn first_failure(&self, value: &V) -> Option<ValidationError> {
        self.rules
            .iter()
            .find_map(|rule| rule.check(value).err())
            .map(|error| self.stamp(error))
    }

    /// True when no rule rejects `value`. Stops at the first failure.
    pub fn is_valid(&self, value: &V) -> bool {
        self.rules.iter().all(|rule| rule.check(value).is_ok())
    }

    fn stamp(&self, error: ValidationError) -> ValidationError {
        match &self.field {
            Some(field) if error.field.is_none() => error.with_field(field.clone()),
            _ => error,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
