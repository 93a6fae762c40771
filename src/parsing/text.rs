//! Line normalization and contact extraction

use crate::parsing::patterns::{EMAIL, PHONE, WHITESPACE, YEAR_RANGE};

/// Collapse whitespace runs to one space and trim both ends.
pub fn sanitize_line(line: &str) -> String {
    WHITESPACE.replace_all(line.trim(), " ").into_owned()
}

/// Sanitize every line of `text`, keeping blank lines as empty strings.
pub fn sanitize_lines(text: &str) -> Vec<String> {
    text.lines().map(sanitize_line).collect()
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// First phone-looking digit group. Spans that read as a year range
/// (`2018-2020`) are skipped.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .find(|candidate| !is_year_span(candidate))
        .map(str::to_string)
}

fn is_year_span(candidate: &str) -> bool {
    YEAR_RANGE
        .find(candidate)
        .map(|m| m.start() == 0 && m.end() == candidate.len())
        .unwrap_or(false)
}
