use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use formguard_validator::prelude::*;

fn password_chain(policy: EvaluationPolicy) -> StringRuleChain {
    StringRuleChain::with_policy(policy)
        .min_length(8)
        .max_length(64)
        .has_uppercase()
        .has_number()
        .has_symbol()
}

fn bench_policies(c: &mut Criterion) {
    let accumulate = password_chain(EvaluationPolicy::AccumulateAll);
    let fail_fast = password_chain(EvaluationPolicy::FailFast);

    let mut group = c.benchmark_group("password_chain");
    for (name, input) in [("valid", "Abcdefg1!"), ("invalid", "abc")] {
        group.bench_function(format!("accumulate_all/{name}"), |b| {
            b.iter(|| accumulate.evaluate(black_box(input)));
        });
        group.bench_function(format!("fail_fast/{name}"), |b| {
            b.iter(|| fail_fast.evaluate(black_box(input)));
        });
    }
    group.finish();
}

fn bench_email(c: &mut Criterion) {
    let rule = is_email();
    c.bench_function("is_email", |b| {
        b.iter(|| rule.check(black_box("first.last+tag@sub.example.com")));
    });
}

criterion_group!(benches, bench_policies, bench_email);
criterion_main!(benches);
