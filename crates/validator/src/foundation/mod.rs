//! Core validation types and traits
//!
//! This module contains the building blocks every chain is made of:
//!
//! - **Traits**: [`Rule`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`ChainError`]
//! - **Configuration**: [`EvaluationPolicy`], [`ChainConfig`]
//!
//! # Architecture
//!
//! ## 1. Rules are values
//!
//! A rule is anything implementing [`Rule`] for the value type it checks.
//! Built-in rules are small structs created through factory functions;
//! closures work too:
//!
//! ```rust
//! use formguard_validator::foundation::{Rule, ValidationError};
//!
//! let no_spaces = |value: &str| {
//!     if value.contains(' ') {
//!         Err(ValidationError::new("no_spaces", "Field must not contain spaces."))
//!     } else {
//!         Ok(())
//!     }
//! };
//! assert!(no_spaces.check("a b").is_err());
//! ```
//!
//! ## 2. Failure is data
//!
//! A failing rule returns a [`ValidationError`]. Nothing in evaluation is
//! fallible in the `?` sense; only chain *configuration* can fail, with a
//! [`ChainError`].
//!
//! ## 3. One policy per chain
//!
//! Whether a chain collects every failure or stops at the first one is an
//! explicit [`EvaluationPolicy`] chosen at construction.

pub mod error;
pub mod policy;
pub mod rule;

pub use error::{ChainError, ValidationError, ValidationErrors};
pub use policy::{ChainConfig, EvaluationPolicy, FIELD_ENV, POLICY_ENV};
pub use rule::Rule;
