//! 2015 day 1: Not Quite Lisp
//!
//! ```bash
//! export AOC_SESSION=<cookie>
//! cargo run -p aoc-runner --example day01_2015 -- --submit
//! ```

use aoc_runner::Runner;
use std::error::Error;

fn step(b: u8) -> i64 {
    match b {
        b'(' => 1,
        b')' => -1,
        _ => 0,
    }
}

fn final_floor(input: &[u8]) -> i64 {
    input.iter().copied().map(step).sum()
}

fn basement_position(input: &[u8]) -> String {
    let mut floor = 0;
    for (i, &b) in input.iter().enumerate() {
        floor += step(b);
        if floor < 0 {
            return (i + 1).to_string();
        }
    }
    "never".to_string()
}

fn main() {
    let result = Runner::new(2015, 1)
        .part1(final_floor)
        .part2(basement_position)
        .run();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let mut cause = e.source();
        while let Some(err) = cause {
            eprintln!("  caused by: {}", err);
            cause = err.source();
        }
        std::process::exit(1);
    }
}
