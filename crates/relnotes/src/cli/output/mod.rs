//! Output formatting utilities
//!
//! Stdout carries only release notes, so every message here goes to stderr.

use console::style;

/// Print a success message
pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").for_stderr().green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").for_stderr().red().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").for_stderr().yellow().bold(), message);
}

/// Style a path for stderr messages
pub fn path(path: &std::path::Path) -> String {
    style(path.display()).for_stderr().cyan().to_string()
}
