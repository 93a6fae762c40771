//! Named patterns used by the resume heuristics
//!
//! Each concept gets its own compiled regex so the heuristics can be tuned
//! and tested without touching the parsing control flow.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `2018-2020`, `2019 – présent`, `2015 to 2017`, `2021 -` (open ended).
pub static YEAR_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?P<start>\d{4})\s*(?:[-–—]|à|to)\s*(?P<end>\d{4}|présent|present|ongoing)?")
        .expect("Invalid year range regex")
});

/// Achievement lines start with one of these markers.
pub static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-•·]").expect("Invalid bullet regex"));

pub static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("Invalid email regex")
});

/// Optional country code, optional area code, then three or four digit pairs.
pub static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:\+\d{1,3}[\s.-]?)?(?:\(\d{2,3}\)[\s.-]?|\d{2,3}[\s.-]?)?\d{2}[\s.-]?\d{2}[\s.-]?\d{2}(?:[\s.-]?\d{2})?",
    )
    .expect("Invalid phone regex")
});

pub static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s]+").expect("Invalid URL regex"));

pub static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

pub static SKILLS_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)compétence|skills").expect("Invalid skills heading regex"));

pub static EDUCATION_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)formation|education").expect("Invalid education heading regex"));

pub static LANGUAGES_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)langue|languages").expect("Invalid languages heading regex"));

pub static PROJECTS_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)projet|project").expect("Invalid projects heading regex"));

pub static SUMMARY_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)profil|summary|à propos|about me").expect("Invalid summary heading regex")
});

/// Headings that hand control back to the experience stream.
pub static EXPERIENCE_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)expérience|experience|parcours|employment").expect("Invalid experience heading regex")
});

pub static SKILL_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,/;]").expect("Invalid skill separator regex"));

pub static TECHNOLOGY_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,/]").expect("Invalid technology separator regex"));

pub static LANGUAGE_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[:\-]").expect("Invalid language separator regex"));

/// A matched period: start year and optional end (year or present marker).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearRange {
    pub start: String,
    pub end: Option<String>,
}

impl YearRange {
    fn from_captures(caps: &Captures<'_>) -> Self {
        Self {
            start: caps["start"].to_string(),
            end: caps.name("end").map(|m| m.as_str().to_string()),
        }
    }
}

/// First year range in `line`, if any.
pub fn find_year_range(line: &str) -> Option<YearRange> {
    YEAR_RANGE.captures(line).map(|caps| YearRange::from_captures(&caps))
}

/// `line` with every year range removed and bullet/dash characters trimmed.
pub fn strip_year_ranges(line: &str) -> String {
    YEAR_RANGE
        .replace_all(line, "")
        .trim_matches(crate::parsing::defaults::BULLET_TRIM)
        .to_string()
}

pub fn is_bullet(line: &str) -> bool {
    BULLET.is_match(line)
}

/// Split on `separator`, trim each fragment and drop empty ones.
pub fn split_trimmed<'a>(separator: &Regex, text: &'a str) -> Vec<&'a str> {
    separator
        .split(text)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}
