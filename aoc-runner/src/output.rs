//! Output formatting for solution results

use crate::runner::PartResult;
use aoc_http_client::SubmissionOutcome;
use chrono::TimeDelta;

/// Output formatter for solution results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &PartResult) {
        if let Some(line) = self.render(result) {
            println!("{}", line);
        }
    }

    /// Render a result as one output line, or None when quiet mode hides it
    pub fn render(&self, result: &PartResult) -> Option<String> {
        let Some(answer) = &result.answer else {
            return (!self.quiet).then(|| {
                format!("No solution provided for part {}", result.level)
            });
        };

        if self.quiet {
            return Some(answer.clone());
        }

        let prefix = format!("{}/{:02} Part {}", result.key.year, result.key.day, result.level);
        let submission_info = match &result.submission {
            Some(outcome) => {
                let time_str = result
                    .submitted_at
                    .map(|t| t.format("%H:%M:%S").to_string())
                    .unwrap_or_default();
                format!(", submitted {}: {}", time_str, format_outcome(outcome))
            }
            None => String::new(),
        };

        Some(format!(
            "{}: {} (solve: {}{})",
            prefix,
            answer,
            format_duration(result.solve_duration),
            submission_info
        ))
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a submission outcome for display
fn format_outcome(outcome: &SubmissionOutcome) -> String {
    match outcome {
        SubmissionOutcome::Correct => "✓ Correct".to_string(),
        SubmissionOutcome::Incorrect => "✗ Sorry, wrong answer".to_string(),
        SubmissionOutcome::TransportError {
            status: Some(status),
            ..
        } => format!("⚠ HTTP {}", status.as_u16()),
        SubmissionOutcome::TransportError {
            status: None,
            message,
        } => format!("⚠ {}", message),
    }
}
