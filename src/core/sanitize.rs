// src/core/sanitize.rs

/// Every line break becomes one space, then the ends are trimmed.
/// Runs of other whitespace are left alone.
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").trim().to_string()
}
