//! Prelude module for convenient imports.
//!
//! Provides a single `use formguard_validator::prelude::*;` import that brings
//! in the chain types, the rule trait, configuration and every built-in rule.

pub use crate::chain::{Outcome, RuleChain};
pub use crate::foundation::{
    ChainConfig, ChainError, EvaluationPolicy, Rule, ValidationError, ValidationErrors,
};
#[allow(clippy::wildcard_imports)]
pub use crate::rules::*;
pub use crate::string::StringRuleChain;
