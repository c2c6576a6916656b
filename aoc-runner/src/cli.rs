//! CLI argument parsing using clap

use aoc_http_client::DEFAULT_SESSION_ENV;
use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solution runner
#[derive(Parser, Debug, Clone)]
#[command(about = "Run Advent of Code solutions", version)]
pub struct Args {
    /// Submit the computed answers to Advent of Code
    #[arg(long)]
    pub submit: bool,

    /// Delete the cached input for this puzzle before fetching
    #[arg(long)]
    pub clean: bool,

    /// Cache directory for puzzle inputs (defaults to the user cache directory)
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Environment variable holding the session cookie
    #[arg(long, default_value = DEFAULT_SESSION_ENV)]
    pub session_env: String,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging (otherwise controlled by RUST_LOG)
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["solution"]).unwrap();
        assert!(!args.submit);
        assert!(!args.clean);
        assert!(args.cache_dir.is_none());
        assert_eq!(args.session_env, "AOC_SESSION");
        assert!(!args.quiet);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "solution",
            "--submit",
            "--clean",
            "--cache-dir",
            "/tmp/aoc",
            "--session-env",
            "MY_SESSION",
            "-q",
        ])
        .unwrap();
        assert!(args.submit);
        assert!(args.clean);
        assert_eq!(args.cache_dir, Some(PathBuf::from("/tmp/aoc")));
        assert_eq!(args.session_env, "MY_SESSION");
        assert!(args.quiet);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["solution", "--retry"]).is_err());
    }
}
