//! # Text Utilities
//!
//! Cleanup helpers for free-form query-string values.

/// Normalize a comma-separated list.
///
/// Splits on `,`, trims every segment, drops empty segments and rejoins with
/// `,`. Returns `None` when nothing is left, so callers can omit the value.
///
/// ```
/// use lib_utils::clean_csv;
///
/// assert_eq!(clean_csv("bitcoin, , ethereum,").as_deref(), Some("bitcoin,ethereum"));
/// assert_eq!(clean_csv(" , "), None);
/// ```
pub fn clean_csv(raw: &str) -> Option<String> {
    let cleaned = raw
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(",");

    non_blank(&cleaned)
}

/// `Some(value)` unless the value is empty or whitespace-only.
pub fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
