// ============================================================================
// Decimal Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - Text and float inputs
// 2. Arithmetic - Add / multiply / divide at growing operand widths
// 3. Rounding and Formatting - Rounding engine and canonical text
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use radix_decimal::prelude::*;
use std::hint::black_box;

/// A value with `digits` significant digits around 1e`digits/2`.
fn operand(digits: usize) -> Decimal {
    let text: String = (0..digits)
        .map(|i| char::from(b'1' + (i % 9) as u8))
        .collect();
    let (int, frac) = text.split_at(digits / 2);
    format!("{int}.{frac}").parse().unwrap()
}

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("text_short", |b| {
        b.iter(|| black_box(parse(black_box("745834720.0001")).unwrap()))
    });
    group.bench_function("text_exponent", |b| {
        b.iter(|| black_box(parse(black_box("-1.23456789e-250")).unwrap()))
    });
    group.bench_function("float", |b| {
        b.iter(|| black_box(parse(black_box(745834720.0001)).unwrap()))
    });

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    for digits in [10, 50, 200].iter() {
        let a = operand(*digits);
        let b = operand(*digits + 3).negate();

        group.bench_with_input(BenchmarkId::new("add", digits), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.checked_add(b).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("mul", digits), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.checked_mul(b).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("div", digits), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.checked_div(b).unwrap()))
        });
    }

    let wide = Context::decimal128();
    let (a, b) = (operand(40), operand(17));
    group.bench_function("div_decimal128", |bench| {
        bench.iter(|| black_box(a.div_with(&b, &wide).unwrap()))
    });

    group.finish();
}

// ============================================================================
// Rounding and Formatting Benchmarks
// ============================================================================

fn benchmark_round_and_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_format");
    let x = operand(60);

    group.bench_function("round_half_even", |b| {
        b.iter(|| black_box(x.round(16, RoundingMode::HalfEven).unwrap()))
    });
    group.bench_function("round_to_places", |b| {
        b.iter(|| black_box(x.round_to_places(2, RoundingMode::HalfUp).unwrap()))
    });
    group.bench_function("to_canonical_string", |b| {
        b.iter(|| black_box(x.to_canonical_string()))
    });
    group.bench_function("to_f64", |b| b.iter(|| black_box(x.to_f64())));

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_arithmetic,
    benchmark_round_and_format
);
criterion_main!(benches);
