//! Basic usage example for the AOC HTTP client
//!
//! This example demonstrates how to:
//! - Create a client with default settings
//! - Create a client with a custom base URL or HTTP configuration
//! - Choose where the session key comes from
//! - Fetch puzzle input
//! - Submit an answer
//!
//! Note: This example requires a valid AOC session cookie in `AOC_SESSION`.
//! You can get your session cookie from your browser's cookies after logging in to adventofcode.com

use aoc_http_client::{AocClient, AocError, AocRequest, Level, SubmissionOutcome};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Create a client with default settings
    println!("=== Example 1: Default Client ===");
    let client = AocClient::new()?;
    println!("✓ Client created with default base URL ({})", client.base_url());

    // Example 2: Create a client with custom base URL (useful for testing)
    println!("\n=== Example 2: Custom Base URL ===");
    let _custom_client = AocClient::builder()
        .base_url("https://adventofcode.com")? // Could be a mock server URL for testing
        .build()?;
    println!("✓ Client created with custom base URL");

    // Example 3: Create a client with custom HTTP configuration
    println!("\n=== Example 3: Custom HTTP Configuration ===");
    let _configured_client = AocClient::builder()
        .client_builder(
            reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(30))
                .use_rustls_tls(),
        )
        .build()?;
    println!("✓ Client created with custom timeout (30s)");

    // Example 4: Session sources
    println!("\n=== Example 4: Session Sources ===");
    let year = 2015;
    let day = 1;
    let from_default_env = AocRequest::new(year, day);
    let _from_other_env = AocRequest::new(year, day).with_session_key_from_env("MY_AOC_COOKIE");
    let _fixed = AocRequest::new(year, day).with_session_key("0123456789abcdef");
    println!("✓ Requests for {} use {:?}", from_default_env.key(), from_default_env.session());

    // Fetch puzzle input for a specific year and day
    println!("\nFetching input for year {} day {}...", year, day);
    let input = match client.get_input_string(&from_default_env.build_input_request()) {
        Ok(input) => input,
        Err(AocError::MissingSession(reason)) => {
            println!("✗ {}", reason);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    println!("✓ Input fetched ({} bytes)", input.len());

    // Floor count for 2015 day 1
    let answer: i64 = input
        .bytes()
        .map(|b| match b {
            b'(' => 1,
            b')' => -1,
            _ => 0,
        })
        .sum();

    println!("\nSubmitting answer {} for part 1...", answer);
    let request = from_default_env.build_submit_request(Level::PartOne, answer.to_string());
    match client.submit_answer(&request)? {
        SubmissionOutcome::Correct => println!("✓ Correct answer (or nothing to report)"),
        SubmissionOutcome::Incorrect => println!("✗ Incorrect answer"),
        SubmissionOutcome::TransportError { message, .. } => println!("⚠ {}", message),
    }

    Ok(())
}
