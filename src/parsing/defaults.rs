//! Placeholder values substituted when the text does not provide them

/// Sentinel start date for entries without a recognisable period.
pub const UNKNOWN_DATE: &str = "N/A";

pub const DEFAULT_FULL_NAME: &str = "Candidat";

pub const PLACEHOLDER_COMPANY: &str = "Expérience";
pub const PLACEHOLDER_ROLE: &str = "Professionnel";
pub const FALLBACK_ACHIEVEMENT: &str = "Résumé supprimé";

pub const PLACEHOLDER_SCHOOL: &str = "Université";
/// Degree used when an education line carries no year range.
pub const PLACEHOLDER_DEGREE: &str = "Formation";
/// Degree used when a dated education line has no school/degree separator.
pub const GENERIC_PROGRAMME: &str = "Programme";

pub const PLACEHOLDER_PROJECT_NAME: &str = "Projet";
pub const DEFAULT_PROJECT_DESCRIPTION: &str = "Projet personnel";

pub const DEFAULT_LANGUAGE_LEVEL: &str = "Intermédiaire";

pub const DEFAULT_SKILLS: [&str; 3] = ["Gestion de projet", "Programmation", "Communication"];

pub const DEFAULT_OFFER_TITLE: &str = "Poste";

// Stored profiles that lack a field read back with these values.
pub const MISSING_COMPANY: &str = "Entreprise";
pub const MISSING_ROLE: &str = "Poste";
pub const MISSING_SCHOOL: &str = "Établissement";
pub const MISSING_DEGREE: &str = "Diplôme";

/// Characters trimmed around headers, bullets and stripped date ranges.
pub const BULLET_TRIM: &[char] = &[' ', '-', '•', '·'];
