//! Structured candidate profile and job offer types
//!
//! Field names are serialized in camelCase, which is what the desktop
//! front-end exchanges. Missing fields fall back to the same placeholders
//! the parser uses, so a partially filled profile can be read back.

use crate::parsing::defaults;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a fresh process-unique identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn unknown_date() -> String {
    defaults::UNKNOWN_DATE.to_string()
}

fn missing_company() -> String {
    defaults::MISSING_COMPANY.to_string()
}

fn missing_role() -> String {
    defaults::MISSING_ROLE.to_string()
}

fn missing_school() -> String {
    defaults::MISSING_SCHOOL.to_string()
}

fn missing_degree() -> String {
    defaults::MISSING_DEGREE.to_string()
}

fn placeholder_project() -> String {
    defaults::PLACEHOLDER_PROJECT_NAME.to_string()
}

fn default_level() -> String {
    defaults::DEFAULT_LANGUAGE_LEVEL.to_string()
}

fn default_name() -> String {
    defaults::DEFAULT_FULL_NAME.to_string()
}

fn default_title() -> String {
    defaults::DEFAULT_OFFER_TITLE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(default = "missing_company")]
    pub company: String,
    #[serde(default = "missing_role")]
    pub role: String,
    #[serde(default = "unknown_date", alias = "start_date")]
    pub start_date: String,
    /// `None` means the position is ongoing.
    #[serde(default, alias = "end_date")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Experience {
    pub fn new(company: impl Into<String>, role: impl Into<String>, start_date: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            company: company.into(),
            role: role.into(),
            start_date: start_date.into(),
            end_date: None,
            achievements: Vec::new(),
            technologies: Vec::new(),
        }
    }

    /// The entry used when no experience could be recognised at all.
    pub fn placeholder(technologies: Vec<String>) -> Self {
        Self {
            achievements: vec![defaults::FALLBACK_ACHIEVEMENT.to_string()],
            technologies,
            ..Self::new(
                defaults::PLACEHOLDER_COMPANY,
                defaults::PLACEHOLDER_ROLE,
                defaults::UNKNOWN_DATE,
            )
        }
    }

    /// No end date, or a textual "present" marker instead of a year.
    pub fn is_ongoing(&self) -> bool {
        match self.end_date.as_deref() {
            None => true,
            Some(end) => !end.chars().any(|c| c.is_ascii_digit()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(default = "missing_school")]
    pub school: String,
    #[serde(default = "missing_degree")]
    pub degree: String,
    #[serde(default = "unknown_date", alias = "start_date")]
    pub start_date: String,
    #[serde(default, alias = "end_date")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Education {
    pub fn new(school: impl Into<String>, degree: impl Into<String>, start_date: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            school: school.into(),
            degree: degree.into(),
            start_date: start_date.into(),
            end_date: None,
            notes: None,
        }
    }

    pub fn placeholder() -> Self {
        Self::new(
            defaults::PLACEHOLDER_SCHOOL,
            defaults::PLACEHOLDER_DEGREE,
            defaults::UNKNOWN_DATE,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(default = "placeholder_project")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub impact: Option<String>,
}

impl Project {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            description: description.into(),
            url: None,
            impact: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageLevel {
    #[serde(default)]
    pub label: String,
    #[serde(default = "default_level")]
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(default = "default_name", alias = "full_name")]
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub languages: Vec<LanguageLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOffer {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl JobOffer {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            company: None,
            description: description.into(),
            location: None,
            keywords: Vec::new(),
        }
    }
}

/// Result of importing a resume file: the parsed profile plus the text it
/// came from and any non-fatal extraction warnings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionPayload {
    pub profile: CandidateProfile,
    #[serde(default, alias = "raw_text")]
    pub raw_text: String,
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_serialization() {
        let mut experience = Experience::new("Acme", "Dev", "2019");
        experience.end_date = Some("2021".to_string());

        let json = serde_json::to_value(&experience).unwrap();

        assert_eq!(json["startDate"], "2019");
        assert_eq!(json["endDate"], "2021");
        assert!(json.get("start_date").is_none());
    }

    #[test]
    fn test_missing_fields_use_placeholders() {
        let experience: Experience = serde_json::from_str(r#"{"achievements": ["x"]}"#).unwrap();
        assert_eq!(experience.company, defaults::MISSING_COMPANY);
        assert_eq!(experience.role, defaults::MISSING_ROLE);
        assert_eq!(experience.start_date, defaults::UNKNOWN_DATE);
        assert!(!experience.id.is_empty());
        assert!(experience.is_ongoing());

        let language: LanguageLevel = serde_json::from_str(r#"{"label": "Anglais"}"#).unwrap();
        assert_eq!(language.level, defaults::DEFAULT_LANGUAGE_LEVEL);

        let profile: CandidateProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile.full_name, defaults::DEFAULT_FULL_NAME);
    }

    #[test]
    fn test_snake_case_profile_loads() {
        let json = r#"{
            "full_name": "Jean Dupont",
            "experiences": [{"start_date": "2018", "end_date": "2020"}],
            "education": [{"start_date": "2015"}]
        }"#;
        let profile: CandidateProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.full_name, "Jean Dupont");
        let experience = &profile.experiences[0];
        assert_eq!(experience.start_date, "2018");
        assert_eq!(experience.end_date.as_deref(), Some("2020"));
        assert_eq!(experience.company, "Entreprise");
        assert_eq!(experience.role, "Poste");

        let education = &profile.education[0];
        assert_eq!(education.start_date, "2015");
        assert_eq!(education.school, "Établissement");
        assert_eq!(education.degree, "Diplôme");
    }

    #[test]
    fn test_identifiers_are_unique() {
        let a = Education::placeholder();
        let b = Education::placeholder();
        assert_ne!(a.id, b.id);
    }
}
