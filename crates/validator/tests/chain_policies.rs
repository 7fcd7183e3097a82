//! End-to-end tests for chain evaluation under both policies.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use formguard_validator::prelude::*;
use pretty_assertions::assert_eq;

fn password_rules(policy: EvaluationPolicy) -> StringRuleChain {
    StringRuleChain::with_policy(policy)
        .min_length(8)
        .has_uppercase()
        .has_number()
}

/// A rule that counts how many times it ran and always passes.
fn counting_rule(calls: &Arc<AtomicUsize>) -> impl Rule<str> + use<> {
    let calls = Arc::clone(calls);
    rule_fn(move |_: &str| {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    })
}

// ============================================================================
// ACCUMULATE-ALL
// ============================================================================

#[test]
fn accumulate_all_reports_every_failure_in_order() {
    let chain = password_rules(EvaluationPolicy::AccumulateAll);

    assert_eq!(
        chain.evaluate("abc").messages(),
        vec![
            "Field must be at least 8 characters.",
            "Field must contain at least one uppercase letter.",
            "Field must contain at least one number.",
        ]
    );
    assert_eq!(chain.evaluate("Abcdefg1"), Outcome::All(ValidationErrors::new()));
}

#[test]
fn accumulate_all_runs_rules_after_a_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let chain = StringRuleChain::new().min_length(8).with_rule(counting_rule(&calls));

    let outcome = chain.evaluate("abc");
    assert_eq!(outcome.errors().len(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// ============================================================================
// FAIL-FAST
// ============================================================================

#[test]
fn fail_fast_reports_only_the_first_failure() {
    let chain = password_rules(EvaluationPolicy::FailFast);

    let outcome = chain.evaluate("abc");
    let expected = ValidationError::new("min_length", "Field must be at least 8 characters.")
        .with_param("min", "8")
        .with_param("actual", "3");
    assert_eq!(outcome, Outcome::First(Some(expected)));
    assert_eq!(outcome.messages(), vec!["Field must be at least 8 characters."]);
    assert_eq!(chain.evaluate("Abcdefg1"), Outcome::First(None));
}

#[test]
fn fail_fast_skips_rules_after_the_first_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let chain = password_rules(EvaluationPolicy::FailFast).with_rule(counting_rule(&calls));

    chain.evaluate("abc");
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    chain.evaluate("Abcdefg1");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn later_failure_is_reported_when_earlier_rules_pass() {
    let chain = password_rules(EvaluationPolicy::FailFast);
    assert_eq!(
        chain.evaluate("abcdefgh").first_message(),
        Some("Field must contain at least one uppercase letter.")
    );
    assert_eq!(
        chain.evaluate("Abcdefgh").first_message(),
        Some("Field must contain at least one number.")
    );
}

#[test]
fn per_call_policy_override() {
    let chain = password_rules(EvaluationPolicy::AccumulateAll);
    assert_eq!(
        chain.evaluate_with("abc", EvaluationPolicy::FailFast).errors().len(),
        1
    );
    assert_eq!(chain.collect_all("abc").len(), 3);
    assert_eq!(
        chain.first_failure("abc").map(|e| e.code),
        Some("min_length".into())
    );
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn chain_built_from_json_config() {
    let config: ChainConfig =
        serde_json::from_str(r#"{"policy": "fail_fast", "field": "password"}"#).unwrap();
    let chain = StringRuleChain::from_config(config).min_length(8).has_number();

    let outcome = chain.evaluate("short");
    assert_eq!(outcome.policy(), EvaluationPolicy::FailFast);
    assert_eq!(outcome.errors()[0].field.as_deref(), Some("password"));
    assert_eq!(
        outcome.errors()[0].to_json_value()["field"],
        serde_json::json!("password")
    );
}

// ============================================================================
// ROBUSTNESS
// ============================================================================

#[test]
fn evaluation_is_repeatable() {
    let chain = password_rules(EvaluationPolicy::AccumulateAll).has_symbol().is_email();
    let first = chain.evaluate("abc");
    for _ in 0..5 {
        assert_eq!(chain.evaluate("abc"), first);
    }
}

#[test]
fn chain_survives_a_panicking_rule() {
    let chain = StringRuleChain::new().min_length(2).with_rule(rule_fn(|value: &str| {
        assert!(value != "boom", "rule blew up");
        Ok(())
    }));

    let result = catch_unwind(AssertUnwindSafe(|| chain.evaluate("boom")));
    assert!(result.is_err());

    assert!(chain.evaluate("fine").is_valid());
    assert_eq!(
        chain.evaluate("x").messages(),
        vec!["Field must be at least 2 characters."]
    );
}

#[test]
fn built_chain_is_shared_across_threads() {
    let chain = Arc::new(password_rules(EvaluationPolicy::AccumulateAll));

    let handles: Vec<_> = ["abc", "Abcdefg1", "ABCDEFGH", "12345678"]
        .into_iter()
        .map(|input| {
            let chain = Arc::clone(&chain);
            thread::spawn(move || chain.evaluate(input).errors().len())
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![3, 0, 1, 1]);
}
