//! # formguard-validator
//!
//! Ordered rule chains for validating form-field values.
//!
//! ## Quick Start
//!
//! ```rust
//! use formguard_validator::prelude::*;
//!
//! let password = StringRuleChain::with_policy(EvaluationPolicy::FailFast)
//!     .for_field("password")
//!     .min_length(8)
//!     .has_uppercase()
//!     .has_number()
//!     .has_symbol();
//!
//! let outcome = password.evaluate("abc");
//! assert_eq!(outcome.first_message(), Some("Field must be at least 8 characters."));
//! assert!(password.evaluate("Abcdefg1!").is_valid());
//! ```
//!
//! ## Evaluation Policies
//!
//! - [`AccumulateAll`](foundation::EvaluationPolicy::AccumulateAll) (default):
//!   every rule runs, every failure is reported in rule order.
//! - [`FailFast`](foundation::EvaluationPolicy::FailFast): evaluation stops at
//!   the first failing rule.
//!
//! ## Custom Rules
//!
//! Implement [`Rule`](foundation::Rule), declare one with the [`rule!`] macro,
//! or pass a closure through [`rules::rule_fn`] / [`rules::message_fn`].
//!
//! ## Built-in Rules
//!
//! - **Length**: [`MinLength`](rules::MinLength), [`MaxLength`](rules::MaxLength)
//! - **Character class**: [`HasUppercase`](rules::HasUppercase),
//!   [`HasLowercase`](rules::HasLowercase), [`HasNumber`](rules::HasNumber),
//!   [`HasSymbol`](rules::HasSymbol)
//! - **Format**: [`IsEmail`](rules::IsEmail), [`MatchesRegex`](rules::MatchesRegex)

pub mod chain;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
pub mod string;
