// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use bint_core::math::{classify::Rounding, interval::Interval};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn operand_pairs() -> Vec<(&'static str, Interval<i128>, Interval<i128>)> {
    vec![
        ("positive", Interval::new(0, 255), Interval::new(1, 255)),
        ("mixed", Interval::new(-1_000, 1_000), Interval::new(-7, 9)),
        ("negative", Interval::new(-65_535, -1), Interval::new(-300, -2)),
        (
            "wide",
            Interval::new(-(1i128 << 100), 1i128 << 100),
            Interval::new(-(1i128 << 20), 1i128 << 20),
        ),
    ]
}

fn bench_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_algebra");
    for (name, a, b) in operand_pairs() {
        group.bench_with_input(BenchmarkId::new("add", name), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a).add(black_box(b)))
        });
        group.bench_with_input(BenchmarkId::new("mul", name), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a).mul(black_box(b)))
        });
        group.bench_with_input(BenchmarkId::new("abs", name), &a, |bench, a| {
            bench.iter(|| black_box(a).abs())
        });
    }
    group.finish();
}

fn bench_classifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_classifier");
    for (name, a, b) in operand_pairs() {
        for rounding in [Rounding::Floor, Rounding::Truncate] {
            group.bench_with_input(
                BenchmarkId::new(format!("divide_{rounding}"), name),
                &(a, b),
                |bench, (a, b)| bench.iter(|| black_box(a).divide(black_box(b), rounding)),
            );
        }
        group.bench_with_input(BenchmarkId::new("clamp", name), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a).clamp(black_box(b), black_box(a)))
        });
        group.bench_with_input(BenchmarkId::new("furthest", name), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a).furthest(black_box(b)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_algebra, bench_classifier);
criterion_main!(benches);
