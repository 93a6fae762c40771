//! Candidate profile assembly
//!
//! Drives sanitization, contact extraction, segmentation and the entity
//! parsers, then fills whatever is still missing with placeholders. The
//! assembler never fails: the worst outcome is an all-placeholder profile.

use crate::models::{new_id, CandidateProfile, Education, Experience};
use crate::parsing::defaults::{DEFAULT_FULL_NAME, DEFAULT_SKILLS};
use crate::parsing::entities::{parse_education, parse_languages, parse_projects, parse_skills};
use crate::parsing::experience::{parse_experiences, ExperienceLimits};
use crate::parsing::patterns::find_year_range;
use crate::parsing::sections::{detect_heading, segment};
use crate::parsing::text::{extract_email, extract_phone, sanitize_lines};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Upper bounds on every collection of the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserLimits {
    pub max_skills: usize,
    pub max_education: usize,
    pub max_projects: usize,
    pub max_experiences: usize,
    pub max_achievements: usize,
    pub max_technologies: usize,
    pub max_summary_lines: usize,
}

impl Default for ParserLimits {
    fn default() -> Self {
        Self {
            max_skills: 25,
            max_education: 6,
            max_projects: 6,
            max_experiences: 8,
            max_achievements: 5,
            max_technologies: 8,
            max_summary_lines: 3,
        }
    }
}

impl ParserLimits {
    pub fn experience_limits(&self) -> ExperienceLimits {
        ExperienceLimits {
            max_experiences: self.max_experiences,
            max_achievements: self.max_achievements,
            max_technologies: self.max_technologies,
        }
    }
}

/// Number of parsed skills carried over into the placeholder experience.
const FALLBACK_TECHNOLOGIES: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct ProfileParser {
    limits: ParserLimits,
}

impl ProfileParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ParserLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ParserLimits {
        &self.limits
    }

    /// Build a profile from raw extracted text.
    pub fn parse(&self, raw_text: &str) -> CandidateProfile {
        let lines = sanitize_lines(raw_text);
        let non_empty: Vec<&String> = lines.iter().filter(|line| !line.is_empty()).collect();

        let full_name = non_empty
            .first()
            .map(|line| line.to_string())
            .unwrap_or_else(|| DEFAULT_FULL_NAME.to_string());

        let sections = segment(&lines);

        let skills = parse_skills(&sections.skills, self.limits.max_skills);
        let languages = parse_languages(&sections.languages);
        let mut education = parse_education(&sections.education, self.limits.max_education);
        let projects = parse_projects(&sections.projects, self.limits.max_projects);
        let mut experiences = parse_experiences(&sections.residual, self.limits.experience_limits());

        let summary = if sections.summary.is_empty() {
            self.summary_from_preamble(&non_empty)
        } else {
            Some(sections.summary.join(" "))
        };

        debug!(
            "Parsed {} skills, {} languages, {} education, {} projects, {} experiences",
            skills.len(),
            languages.len(),
            education.len(),
            projects.len(),
            experiences.len()
        );

        if education.is_empty() {
            debug!("No education recognised, using placeholder");
            education.push(Education::placeholder());
        }
        if experiences.is_empty() {
            debug!("No dated experience recognised, using placeholder");
            let technologies = skills.iter().take(FALLBACK_TECHNOLOGIES).cloned().collect();
            experiences.push(Experience::placeholder(technologies));
        }
        let skills = if skills.is_empty() {
            DEFAULT_SKILLS.iter().map(|skill| skill.to_string()).collect()
        } else {
            skills
        };

        info!("Parsed candidate profile for {}", full_name);

        CandidateProfile {
            id: new_id(),
            full_name,
            email: extract_email(raw_text),
            phone: extract_phone(raw_text),
            summary,
            experiences,
            skills,
            education,
            projects,
            languages,
        }
    }

    /// Lines between the name and the first heading or dated entry.
    fn summary_from_preamble(&self, non_empty: &[&String]) -> Option<String> {
        let preamble: Vec<&str> = non_empty
            .iter()
            .skip(1)
            .take_while(|line| detect_heading(line).is_none() && find_year_range(line).is_none())
            .take(self.limits.max_summary_lines)
            .map(|line| line.as_str())
            .collect();

        if preamble.is_empty() {
            None
        } else {
            Some(preamble.join(" "))
        }
    }
}

/// Parse `raw_text` with the default limits.
pub fn parse_candidate_profile(raw_text: &str) -> CandidateProfile {
    ProfileParser::new().parse(raw_text)
}
