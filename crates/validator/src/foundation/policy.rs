//! Evaluation policy and chain configuration
//!
//! A chain either reports every failing rule or stops at the first one.
//! The choice is made once, when the chain is built, either in code or from
//! configuration data:
//!
//! - `FORMGUARD_EVALUATION_POLICY` — `accumulate_all` (default) or `fail_fast`
//! - `FORMGUARD_FIELD` — field name stamped onto every error

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::ChainError;

/// Environment variable holding the evaluation policy.
pub const POLICY_ENV: &str = "FORMGUARD_EVALUATION_POLICY";

/// Environment variable holding the field name.
pub const FIELD_ENV: &str = "FORMGUARD_FIELD";

// ============================================================================
// EVALUATION POLICY
// ============================================================================

/// How a chain aggregates rule failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationPolicy {
    /// Run every rule and collect every failure in rule order.
    #[default]
    AccumulateAll,
    /// Stop at the first failing rule; later rules are not run.
    FailFast,
}

impl EvaluationPolicy {
    /// Canonical snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AccumulateAll => "accumulate_all",
            Self::FailFast => "fail_fast",
        }
    }
}

impl fmt::Display for EvaluationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvaluationPolicy {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "accumulate_all" | "accumulate" | "all" => Ok(Self::AccumulateAll),
            "fail_fast" | "first" => Ok(Self::FailFast),
            _ => Err(ChainError::UnknownPolicy(s.to_string())),
        }
    }
}

// ============================================================================
// CHAIN CONFIG
// ============================================================================

/// Construction-time settings for a [`RuleChain`](crate::chain::RuleChain).
///
/// # Examples
///
/// ```rust
/// use formguard_validator::foundation::{ChainConfig, EvaluationPolicy};
///
/// let config: ChainConfig = serde_json::from_str(r#"{"policy": "fail_fast"}"#).unwrap();
/// assert_eq!(config.policy, EvaluationPolicy::FailFast);
/// assert!(config.field.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Aggregation policy used by `evaluate`.
    pub policy: EvaluationPolicy,
    /// Field name stamped onto produced errors.
    pub field: Option<String>,
}

impl ChainConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ChainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults
    /// for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ChainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(v) = lookup(POLICY_ENV) {
            config.policy = v.parse()?;
        }
        if let Some(v) = lookup(FIELD_ENV)
            && !v.trim().is_empty()
        {
            config.field = Some(v);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("accumulate_all", EvaluationPolicy::AccumulateAll)]
    #[case("Accumulate-All", EvaluationPolicy::AccumulateAll)]
    #[case("all", EvaluationPolicy::AccumulateAll)]
    #[case("fail_fast", EvaluationPolicy::FailFast)]
    #[case(" FAIL-FAST ", EvaluationPolicy::FailFast)]
    #[case("first", EvaluationPolicy::FailFast)]
    fn test_policy_parse(#[case] input: &str, #[case] expected: EvaluationPolicy) {
        assert_eq!(input.parse::<EvaluationPolicy>().unwrap(), expected);
    }

    #[test]
    fn test_policy_parse_unknown() {
        let err = "sometimes".parse::<EvaluationPolicy>().unwrap_err();
        assert!(matches!(err, ChainError::UnknownPolicy(ref s) if s == "sometimes"));
    }

    #[test]
    fn test_policy_display_round_trips_through_parse() {
        for policy in [EvaluationPolicy::AccumulateAll, EvaluationPolicy::FailFast] {
            assert_eq!(policy.to_string().parse::<EvaluationPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_default_is_accumulate_all() {
        assert_eq!(EvaluationPolicy::default(), EvaluationPolicy::AccumulateAll);
        assert_eq!(ChainConfig::default().policy, EvaluationPolicy::AccumulateAll);
    }

    #[test]
    fn test_config_from_lookup() {
        let config = ChainConfig::from_lookup(|key| match key {
            POLICY_ENV => Some("fail_fast".to_string()),
            FIELD_ENV => Some("password".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.policy, EvaluationPolicy::FailFast);
        assert_eq!(config.field.as_deref(), Some("password"));
    }

    #[test]
    fn test_config_from_lookup_unset_and_blank() {
        let config = ChainConfig::from_lookup(|key| (key == FIELD_ENV).then(|| "  ".to_string()))
            .unwrap();
        assert_eq!(config, ChainConfig::default());
    }

    #[test]
    fn test_config_from_lookup_bad_policy() {
        let result = ChainConfig::from_lookup(|_| Some("maybe".to_string()));
        assert!(matches!(result, Err(ChainError::UnknownPolicy(_))));
    }

    #[test]
    fn test_config_deserialize() {
        let config: ChainConfig =
            serde_json::from_str(r#"{"policy": "accumulate_all", "field": "email"}"#).unwrap();
        assert_eq!(config.policy, EvaluationPolicy::AccumulateAll);
        assert_eq!(config.field.as_deref(), Some("email"));

        let empty: ChainConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ChainConfig::default());
    }
}
