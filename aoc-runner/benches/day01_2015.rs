//! Benchmarks for 2015 day 1 against the cached puzzle input.
//!
//! The input is downloaded on the first run (needs `AOC_SESSION`) and read
//! from the cache afterwards.
//!
//! Run with: cargo bench -p aoc-runner

use aoc_runner::Runner;
use criterion::{Criterion, criterion_group, criterion_main};
use std::error::Error;

fn final_floor(input: &[u8]) -> i64 {
    input
        .iter()
        .map(|&b| match b {
            b'(' => 1,
            b')' => -1,
            _ => 0,
        })
        .sum()
}

fn bench_day01(c: &mut Criterion) {
    if let Err(e) = Runner::new(2015, 1).part1(final_floor).bench(c) {
        eprintln!("Error: {}", e);
        let mut cause = e.source();
        while let Some(err) = cause {
            eprintln!("  caused by: {}", err);
            cause = err.source();
        }
        std::process::exit(1);
    }
}

criterion_group!(benches, bench_day01);
criterion_main!(benches);
