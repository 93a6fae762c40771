//! Section segmentation of sanitized resume lines

use crate::parsing::patterns::{
    find_year_range, is_bullet, EDUCATION_HEADING, EXPERIENCE_HEADING, LANGUAGES_HEADING, PROJECTS_HEADING,
    SKILLS_HEADING, SUMMARY_HEADING,
};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bucket {
    Skills,
    Education,
    Languages,
    Projects,
    Summary,
}

/// Longest label still read as a section title.
const MAX_HEADING_WORDS: usize = 4;

/// What a heading line switches the segmenter to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Bucket(Bucket),
    Experience,
}

/// Lines grouped per bucket, plus everything no bucket captured.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub languages: Vec<String>,
    pub projects: Vec<String>,
    pub summary: Vec<String>,
    /// Uncaptured lines in order. Headings and bucket exits leave an empty
    /// line behind so the experience stream sees the boundary.
    pub residual: Vec<String>,
}

impl Sections {
    pub fn bucket(&self, bucket: Bucket) -> &[String] {
        match bucket {
            Bucket::Skills => &self.skills,
            Bucket::Education => &self.education,
            Bucket::Languages => &self.languages,
            Bucket::Projects => &self.projects,
            Bucket::Summary => &self.summary,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<String> {
        match bucket {
            Bucket::Skills => &mut self.skills,
            Bucket::Education => &mut self.education,
            Bucket::Languages => &mut self.languages,
            Bucket::Projects => &mut self.projects,
            Bucket::Summary => &mut self.summary,
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bucket::Skills => write!(f, "skills"),
            Bucket::Education => write!(f, "education"),
            Bucket::Languages => write!(f, "languages"),
            Bucket::Projects => write!(f, "projects"),
            Bucket::Summary => write!(f, "summary"),
        }
    }
}

/// Classify `line` as a section heading.
///
/// Lines carrying a year range are entries, never headings, even when they
/// mention a heading keyword ("2019-2021 - Projet Atlas"). Bullets and
/// lists ("- Pilotage du projet", "Gestion de projet, Python") are content
/// too: only a short label, optionally followed by `:`, can be a heading.
pub fn detect_heading(line: &str) -> Option<Heading> {
    if line.is_empty() || is_bullet(line) || find_year_range(line).is_some() {
        return None;
    }

    let label = line.split(':').next().unwrap_or(line).trim();
    if label.is_empty()
        || label.contains(&[',', '/', ';'][..])
        || label.split_whitespace().count() > MAX_HEADING_WORDS
    {
        return None;
    }

    let buckets = [
        (&*SKILLS_HEADING, Bucket::Skills),
        (&*EDUCATION_HEADING, Bucket::Education),
        (&*LANGUAGES_HEADING, Bucket::Languages),
        (&*PROJECTS_HEADING, Bucket::Projects),
        (&*SUMMARY_HEADING, Bucket::Summary),
    ];

    for (pattern, bucket) in buckets {
        if pattern.is_match(label) {
            return Some(Heading::Bucket(bucket));
        }
    }

    if EXPERIENCE_HEADING.is_match(label) {
        return Some(Heading::Experience);
    }

    None
}

/// Content written on the heading line itself, e.g. `Compétences : Rust, Go`.
fn inline_content(line: &str) -> Option<&str> {
    line.split_once(':')
        .map(|(_, rest)| rest.trim())
        .filter(|rest| !rest.is_empty())
}

/// Partition sanitized lines into buckets.
pub fn segment(lines: &[String]) -> Sections {
    let mut sections = Sections::default();
    let mut current: Option<Bucket> = None;

    for line in lines {
        if let Some(heading) = detect_heading(line) {
            sections.residual.push(String::new());
            current = match heading {
                Heading::Bucket(bucket) => {
                    if let Some(content) = inline_content(line) {
                        sections.bucket_mut(bucket).push(content.to_string());
                    }
                    Some(bucket)
                }
                Heading::Experience => None,
            };
            continue;
        }

        match current {
            Some(_) if line.is_empty() => {
                current = None;
                sections.residual.push(String::new());
            }
            Some(bucket) => sections.bucket_mut(bucket).push(line.clone()),
            None => sections.residual.push(line.clone()),
        }
    }

    debug!(
        "Segmented {} lines: {} skills, {} education, {} languages, {} projects, {} summary, {} residual",
        lines.len(),
        sections.skills.len(),
        sections.education.len(),
        sections.languages.len(),
        sections.projects.len(),
        sections.summary.len(),
        sections.residual.len()
    );

    sections
}
