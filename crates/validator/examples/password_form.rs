//! Validates a sign-up form's password and email fields under both policies.

use formguard_validator::prelude::*;

fn main() -> Result<(), ChainError> {
    let config = ChainConfig::from_env()?;

    let password = StringRuleChain::from_config(config)
        .min_length(8)
        .max_length(64)
        .has_uppercase()
        .has_number()
        .has_symbol();

    let email = StringRuleChain::with_policy(EvaluationPolicy::FailFast)
        .for_field("email")
        .is_email();

    for input in ["abc", "Abcdefg1", "Abcdefg1!"] {
        let outcome = password.evaluate(input);
        if outcome.is_valid() {
            println!("✓ password {input:?} accepted");
        } else {
            println!("✗ password {input:?} rejected ({}):", outcome.policy());
            for message in outcome.messages() {
                println!("    - {message}");
            }
        }
    }

    for input in ["user@example.com", "user@localhost"] {
        match email.evaluate(input).into_result() {
            Ok(()) => println!("✓ email {input:?} accepted"),
            Err(errors) => print!("✗ email {input:?}: {errors}"),
        }
    }

    Ok(())
}
