//! Parsers turning one bucket of lines into structured entities

use crate::models::{Education, LanguageLevel, Project};
use crate::parsing::defaults::{
    BULLET_TRIM, DEFAULT_LANGUAGE_LEVEL, DEFAULT_PROJECT_DESCRIPTION, GENERIC_PROGRAMME,
    PLACEHOLDER_DEGREE, UNKNOWN_DATE,
};
use crate::parsing::patterns::{
    find_year_range, split_trimmed, strip_year_ranges, LANGUAGE_SEPARATOR, SKILL_SEPARATOR, URL,
};
use std::collections::HashSet;

/// Keep the first occurrence of every item, preserving order.
pub fn dedup_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Split every line on `,`, `/` or `;` into a deduplicated skill list.
pub fn parse_skills(lines: &[String], max_skills: usize) -> Vec<String> {
    let items = lines.iter().flat_map(|line| {
        let clean = line.trim().trim_matches(BULLET_TRIM);
        split_trimmed(&SKILL_SEPARATOR, clean)
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>()
    });

    let mut skills = dedup_preserving_order(items);
    skills.truncate(max_skills);
    skills
}

/// `Anglais : C1` or `Espagnol - courant`; anything else is a bare label.
pub fn parse_languages(lines: &[String]) -> Vec<LanguageLevel> {
    lines
        .iter()
        .map(|line| line.trim().trim_start_matches(BULLET_TRIM))
        .filter(|line| !line.is_empty())
        .map(|line| {
            let parts: Vec<&str> = LANGUAGE_SEPARATOR.split(line).collect();
            let (label, level) = match parts.as_slice() {
                [label, level] => (label.trim(), level.trim()),
                _ => (line, ""),
            };
            let level = if level.is_empty() { DEFAULT_LANGUAGE_LEVEL } else { level };
            LanguageLevel {
                label: label.to_string(),
                level: level.to_string(),
            }
        })
        .collect()
}

/// One education entry per line.
pub fn parse_education(lines: &[String], max_entries: usize) -> Vec<Education> {
    let mut entries: Vec<Education> = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_education_line(line))
        .collect();
    entries.truncate(max_entries);
    entries
}

fn parse_education_line(line: &str) -> Education {
    let Some(range) = find_year_range(line) else {
        return Education::new(line.trim(), PLACEHOLDER_DEGREE, UNKNOWN_DATE);
    };

    let description = strip_year_ranges(line);
    let (school, degree) = if let Some((school, degree)) = description.split_once(':') {
        (school.trim().to_string(), degree.trim().to_string())
    } else if let Some((school, degree)) = description.split_once(" - ") {
        (school.trim().to_string(), degree.trim().to_string())
    } else {
        (description.clone(), GENERIC_PROGRAMME.to_string())
    };

    let mut education = Education::new(school, degree, range.start);
    education.end_date = range.end;
    education
}

/// `Nom - description [url]`, one project per line.
pub fn parse_projects(lines: &[String], max_entries: usize) -> Vec<Project> {
    let mut projects: Vec<Project> = lines.iter().filter_map(|line| parse_project_line(line)).collect();
    projects.truncate(max_entries);
    projects
}

fn parse_project_line(line: &str) -> Option<Project> {
    let url = URL.find(line).map(|m| m.as_str().trim_end_matches(&['.', ',', ')'][..]).to_string());
    let without_url = match &url {
        Some(_) => URL.replace(line, "").into_owned(),
        None => line.to_string(),
    };

    let clean = without_url.trim().trim_matches(BULLET_TRIM);
    if clean.is_empty() {
        return url.map(|url| {
            let mut project = Project::new(url.clone(), DEFAULT_PROJECT_DESCRIPTION);
            project.url = Some(url);
            project
        });
    }

    let (name, description) = match clean.split_once('-') {
        Some((name, description)) if !description.trim().is_empty() => (name.trim(), description.trim()),
        Some((name, _)) => (name.trim(), DEFAULT_PROJECT_DESCRIPTION),
        None => (clean, DEFAULT_PROJECT_DESCRIPTION),
    };

    let mut project = Project::new(name, description);
    project.url = url;
    Some(project)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_skills() {
        let skills = parse_skills(&lines(&["- Rust, Go / SQL", "• Rust; Docker", "·"]), 25);
        assert_eq!(skills, vec!["Rust", "Go", "SQL", "Docker"]);
    }

    #[test]
    fn test_parse_skills_truncates() {
        let line = (0..40).map(|i| format!("skill{}", i)).collect::<Vec<_>>().join(", ");
        let skills = parse_skills(&[line], 25);
        assert_eq!(skills.len(), 25);
        assert_eq!(skills[0], "skill0");
    }

    #[test]
    fn test_parse_languages() {
        let languages = parse_languages(&lines(&["Anglais : C1", "Espagnol - courant", "Italien", "- Allemand: B2"]));

        assert_eq!(languages[0].label, "Anglais");
        assert_eq!(languages[0].level, "C1");
        assert_eq!(languages[1].label, "Espagnol");
        assert_eq!(languages[1].level, "courant");
        assert_eq!(languages[2].label, "Italien");
        assert_eq!(languages[2].level, DEFAULT_LANGUAGE_LEVEL);
        assert_eq!(languages[3].label, "Allemand");
        assert_eq!(languages[3].level, "B2");
    }

    #[test]
    fn test_parse_languages_ambiguous_split() {
        let languages = parse_languages(&lines(&["Anglais : C1 - TOEIC"]));
        assert_eq!(languages[0].label, "Anglais : C1 - TOEIC");
        assert_eq!(languages[0].level, DEFAULT_LANGUAGE_LEVEL);
    }

    #[test]
    fn test_parse_education_with_colon() {
        let education = parse_education(&lines(&["Ecole Z : Master Info 2015-2017"]), 6);

        assert_eq!(education.len(), 1);
        assert_eq!(education[0].school, "Ecole Z");
        assert_eq!(education[0].degree, "Master Info");
        assert_eq!(education[0].start_date, "2015");
        assert_eq!(education[0].end_date.as_deref(), Some("2017"));
    }

    #[test]
    fn test_parse_education_variants() {
        let education = parse_education(
            &lines(&["2012 - 2014 Université Y - Licence", "Lycée Victor Hugo 2009-2012", "Bac S mention bien"]),
            6,
        );

        assert_eq!(education[0].school, "Université Y");
        assert_eq!(education[0].degree, "Licence");
        assert_eq!(education[1].school, "Lycée Victor Hugo");
        assert_eq!(education[1].degree, GENERIC_PROGRAMME);
        assert_eq!(education[2].school, "Bac S mention bien");
        assert_eq!(education[2].degree, PLACEHOLDER_DEGREE);
        assert_eq!(education[2].start_date, UNKNOWN_DATE);
        assert_eq!(education[2].end_date, None);
    }

    #[test]
    fn test_parse_education_truncates() {
        let input: Vec<String> = (0..10).map(|i| format!("Ecole {}", i)).collect();
        assert_eq!(parse_education(&input, 6).len(), 6);
    }

    #[test]
    fn test_parse_projects() {
        let projects = parse_projects(
            &lines(&["- Atlas - moteur de recherche interne", "• Blog perso", "Outil CLI - https://github.com/jd/cli"]),
            6,
        );

        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0].name, "Atlas");
        assert_eq!(projects[0].description, "moteur de recherche interne");
        assert_eq!(projects[1].name, "Blog perso");
        assert_eq!(projects[1].description, DEFAULT_PROJECT_DESCRIPTION);
        assert_eq!(projects[2].name, "Outil CLI");
        assert_eq!(projects[2].url.as_deref(), Some("https://github.com/jd/cli"));
    }

    #[test]
    fn test_parse_projects_skips_bare_bullets() {
        let projects = parse_projects(&lines(&["-", "•", "Atlas"]), 6);
        assert_eq!(projects.len(), 1);
    }

    #[test]
    fn test_dedup_preserving_order() {
        let items = vec!["b", "a", "b", "c", "a"].into_iter().map(String::from);
        assert_eq!(dedup_preserving_order(items), vec!["b", "a", "c"]);
    }
}
