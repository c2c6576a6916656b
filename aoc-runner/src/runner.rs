//! Solution harness: fetch input, run parts, optionally submit

use crate::cache::InputCache;
use crate::cli::Args;
use crate::config::Config;
use crate::error::RunnerError;
use crate::output::OutputFormatter;
use aoc_http_client::{AocClient, AocRequest, Level, PuzzleKey, SubmissionOutcome};
use chrono::{DateTime, Local, TimeDelta, Utc};
use clap::Parser;
use criterion::Criterion;
use std::fmt::Display;
use std::hint::black_box;

/// A solution with its answer already formatted to a string
type Solution = Box<dyn Fn(&[u8]) -> String>;

/// Outcome of running one part
#[derive(Debug, Clone)]
pub struct PartResult {
    pub key: PuzzleKey,
    pub level: Level,
    /// Formatted answer, None if no solution was provided for this part
    pub answer: Option<String>,
    pub solve_duration: TimeDelta,
    pub submitted_at: Option<DateTime<Local>>,
    pub submission: Option<SubmissionOutcome>,
}

/// Results of a whole run, one entry per level
#[derive(Debug, Clone)]
pub struct RunReport {
    pub key: PuzzleKey,
    pub parts: Vec<PartResult>,
}

impl RunReport {
    pub fn part(&self, level: Level) -> Option<&PartResult> {
        self.parts.iter().find(|p| p.level == level)
    }
}

/// Runs solutions for one puzzle
///
/// Solutions receive the raw input bytes and may return any `Display` type.
///
/// # Example
///
/// ```no_run
/// use aoc_runner::Runner;
///
/// fn part1(input: &[u8]) -> usize {
///     input.iter().filter(|&&b| b == b'(').count()
/// }
///
/// fn main() {
///     if let Err(e) = Runner::new(2015, 1).part1(part1).run() {
///         eprintln!("Error: {}", e);
///         std::process::exit(1);
///     }
/// }
/// ```
pub struct Runner {
    key: PuzzleKey,
    solutions: [Option<Solution>; 2],
    client: Option<AocClient>,
}

impl Runner {
    pub fn new(year: u16, day: u8) -> Self {
        Self {
            key: PuzzleKey::new(year, day),
            solutions: [None, None],
            client: None,
        }
    }

    /// Set the part 1 solution
    pub fn part1<T, F>(self, solution: F) -> Self
    where
        T: Display,
        F: Fn(&[u8]) -> T + 'static,
    {
        self.part(Level::PartOne, solution)
    }

    /// Set the part 2 solution
    pub fn part2<T, F>(self, solution: F) -> Self
    where
        T: Display,
        F: Fn(&[u8]) -> T + 'static,
    {
        self.part(Level::PartTwo, solution)
    }

    /// Set the solution for the given level
    pub fn part<T, F>(mut self, level: Level, solution: F) -> Self
    where
        T: Display,
        F: Fn(&[u8]) -> T + 'static,
    {
        let slot = usize::from(level.as_u8() - 1);
        self.solutions[slot] = Some(Box::new(move |input: &[u8]| format_answer(solution(input))));
        self
    }

    /// Use a preconfigured HTTP client (custom base URL, timeouts, ...)
    pub fn with_client(mut self, client: AocClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Parse process arguments, then run
    pub fn run(self) -> Result<RunReport, RunnerError> {
        self.run_with_args(Args::parse())
    }

    /// Run with already parsed arguments
    pub fn run_with_args(self, args: Args) -> Result<RunReport, RunnerError> {
        crate::logging::init(args.debug);
        let config = Config::from_args(self.key, args)?;
        self.run_with_config(&config)
    }

    /// Run with a fully resolved configuration
    ///
    /// The configuration's puzzle key takes precedence over the one given to
    /// [`Runner::new`].
    pub fn run_with_config(self, config: &Config) -> Result<RunReport, RunnerError> {
        let key = config.key;
        let client = match self.client {
            Some(client) => client,
            None => AocClient::new()?,
        };
        let cache = InputCache::new(&config.cache_dir);
        let request = AocRequest::for_key(key).with_session_source(config.session.clone());

        if config.clean && cache.remove(key)? {
            tracing::info!(puzzle = %key, "removed cached input");
        }

        let input = cache.fetch(&client, &request.build_input_request())?;

        let formatter = OutputFormatter::new(config.quiet);
        let mut parts = Vec::with_capacity(self.solutions.len());

        for (level, solution) in Level::ALL.into_iter().zip(&self.solutions) {
            let mut result = PartResult {
                key,
                level,
                answer: None,
                solve_duration: TimeDelta::zero(),
                submitted_at: None,
                submission: None,
            };

            if let Some(solution) = solution {
                let solve_start = Utc::now();
                let answer = solution(input.as_slice());
                result.solve_duration = Utc::now() - solve_start;

                if config.submit {
                    let outcome =
                        client.submit_answer(&request.build_submit_request(level, answer.as_str()))?;
                    result.submitted_at = Some(Local::now());
                    result.submission = Some(outcome);
                }
                result.answer = Some(answer);
            }

            formatter.print_result(&result);
            parts.push(result);
        }

        Ok(RunReport { key, parts })
    }

    /// Benchmark the provided parts with the default configuration
    ///
    /// Meant to be called from a `benches/` target with `harness = false`:
    ///
    /// ```no_run
    /// use aoc_runner::Runner;
    /// use criterion::{Criterion, criterion_group, criterion_main};
    ///
    /// fn floors(c: &mut Criterion) {
    ///     Runner::new(2015, 1)
    ///         .part1(|input: &[u8]| input.len())
    ///         .bench(c)
    ///         .unwrap();
    /// }
    ///
    /// criterion_group!(benches, floors);
    /// criterion_main!(benches);
    /// ```
    pub fn bench(&self, c: &mut Criterion) -> Result<Vec<Level>, RunnerError> {
        self.bench_with_config(c, &Config::new(self.key)?)
    }

    /// Benchmark the provided parts against the cached input
    ///
    /// The input is loaded once through [`InputCache::fetch`]. Parts without a
    /// solution are skipped. Returns the levels that were benchmarked.
    pub fn bench_with_config(
        &self,
        c: &mut Criterion,
        config: &Config,
    ) -> Result<Vec<Level>, RunnerError> {
        let key = config.key;
        let client = match &self.client {
            Some(client) => client.clone(),
            None => AocClient::new()?,
        };
        let request = AocRequest::for_key(key).with_session_source(config.session.clone());
        let input = InputCache::new(&config.cache_dir).fetch(&client, &request.build_input_request())?;

        let mut group = c.benchmark_group(format!("{}-day{:02}", key.year, key.day));
        let mut benchmarked = Vec::new();
        for (level, solution) in Level::ALL.into_iter().zip(&self.solutions) {
            let Some(solution) = solution else {
                tracing::info!(puzzle = %key, %level, "no solution provided, skipping benchmark");
                continue;
            };
            group.bench_function(format!("part {}", level), |b| {
                b.iter(|| solution(black_box(input.as_slice())))
            });
            benchmarked.push(level);
        }
        group.finish();

        Ok(benchmarked)
    }
}

/// Formatting step applied to every solution's return value
pub fn format_answer<T: Display>(value: T) -> String {
    value.to_string()
}
