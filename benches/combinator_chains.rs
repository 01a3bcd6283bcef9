//! Combinator chain benchmarks.
//!
//! Measures the cost of the composition styles the crate offers:
//!
//! - `map`/`and_then` chains over both families (expected to optimize to
//!   plain branches);
//! - a `binding` body versus the equivalent hand-written match ladder
//!   (expected to be identical, since the protocol is plain data flow);
//! - the `run_catching` boundary on the happy path (the one place with a
//!   real setup cost, from `catch_unwind`).

use bivalent::{binding, run_catching, Maybe, Outcome};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn parse_step(n: i64) -> Outcome<i64, &'static str> {
    if n % 97 == 0 {
        Outcome::err_of("multiple of 97")
    } else {
        Outcome::ok_of(n + 1)
    }
}

fn bench_maybe_map_chain(c: &mut Criterion) {
    c.bench_function("maybe/map_chain", |b| {
        b.iter(|| {
            black_box(Maybe::some(black_box(17i64)))
                .map(|n| n * 3)
                .map(|n| n - 4)
                .map(|n| n / 2)
                .unwrap_or(0)
        });
    });
}

fn bench_outcome_and_then_chain(c: &mut Criterion) {
    c.bench_function("outcome/and_then_chain", |b| {
        b.iter(|| {
            parse_step(black_box(10))
                .and_then(parse_step)
                .and_then(parse_step)
                .unwrap_or(0)
        });
    });
}

fn bench_binding_body(c: &mut Criterion) {
    c.bench_function("outcome/binding_body", |b| {
        b.iter(|| {
            binding(|| {
                let x = parse_step(black_box(10)).bind()?;
                let y = parse_step(x).bind()?;
                let z = parse_step(y).bind()?;
                Ok(x + y + z)
            })
            .unwrap_or(0)
        });
    });
}

fn bench_manual_match_ladder(c: &mut Criterion) {
    c.bench_function("outcome/manual_match_ladder", |b| {
        b.iter(|| {
            let a = match parse_step(black_box(10)) {
                Outcome::Ok(v) => v,
                Outcome::Err(_) => return 0,
            };
            let bv = match parse_step(a) {
                Outcome::Ok(v) => v,
                Outcome::Err(_) => return 0,
            };
            let cv = match parse_step(bv) {
                Outcome::Ok(v) => v,
                Outcome::Err(_) => return 0,
            };
            a + bv + cv
        });
    });
}

fn bench_run_catching_happy_path(c: &mut Criterion) {
    c.bench_function("outcome/run_catching_happy", |b| {
        b.iter(|| run_catching(|| black_box(21i64) * 2).unwrap_or(0));
    });
}

criterion_group!(
    benches,
    bench_maybe_map_chain,
    bench_outcome_and_then_chain,
    bench_binding_body,
    bench_manual_match_ladder,
    bench_run_catching_happy_path,
);
criterion_main!(benches);
