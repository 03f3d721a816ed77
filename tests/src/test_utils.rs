//! Test utility functions for integration tests

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging for tests
///
/// Uses RUST_LOG environment variable if set, otherwise defaults to "info"
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Returns the lines of the "Potential issues" section of a summary
pub fn issue_lines(summary: &str) -> Vec<&str> {
    summary
        .lines()
        .skip_while(|line| !line.starts_with("Potential issues:"))
        .skip(1)
        .take_while(|line| !line.starts_with("Attempt "))
        .collect()
}

/// Asserts the issue section of a summary equals `expected`
pub fn assert_issue_lines(summary: &str, expected: &[&str]) {
    let actual = issue_lines(summary);
    assert_eq!(actual, expected, "unexpected issues in summary:\n{summary}");
}
