//! Output formatting utilities.

use colored::Colorize;

/// Print a section header
pub(crate) fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").cyan().bold());
}

/// Print a key-value pair
pub(crate) fn kv(key: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", key.white().bold(), value);
}

/// Print an info message
pub(crate) fn info(msg: &str) {
    println!("{} {}", "[INFO]".blue(), msg);
}

/// Print a warning message
pub(crate) fn warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// Print an error message
pub(crate) fn error(msg: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), msg);
}

/// Similarity rendered with 4 decimal places.
pub(crate) fn format_similarity(value: f64) -> String {
    format!("{value:.4}")
}

/// Predicted score rendered with 3 decimal places.
pub(crate) fn format_score(value: f64) -> String {
    format!("{value:.3}")
}
