//! Configuration management for the cv parser

use crate::error::{CvParserError, Result};
use crate::offer::KeywordConfig;
use crate::parsing::ParserLimits;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserLimits,
    #[serde(default)]
    pub keywords: KeywordConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty_json: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty_json: true,
            color_output: true,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("cv-parser")
            .join("config.toml")
    }

    /// Every limit must be non-zero, and parser limits may only tighten the
    /// profile bounds, never loosen them.
    pub fn validate(&self) -> Result<()> {
        let bounds = ParserLimits::default();
        let limits = [
            ("parser.max_skills", self.parser.max_skills, Some(bounds.max_skills)),
            ("parser.max_education", self.parser.max_education, Some(bounds.max_education)),
            ("parser.max_projects", self.parser.max_projects, Some(bounds.max_projects)),
            ("parser.max_experiences", self.parser.max_experiences, Some(bounds.max_experiences)),
            ("parser.max_achievements", self.parser.max_achievements, Some(bounds.max_achievements)),
            ("parser.max_technologies", self.parser.max_technologies, Some(bounds.max_technologies)),
            ("parser.max_summary_lines", self.parser.max_summary_lines, Some(bounds.max_summary_lines)),
            ("keywords.top_k", self.keywords.top_k, None),
            ("keywords.max_features", self.keywords.max_features, None),
        ];

        for (key, value, max) in limits {
            if value == 0 {
                return Err(CvParserError::Configuration(format!("{} must be greater than zero", key)));
            }
            if let Some(max) = max {
                if value > max {
                    return Err(CvParserError::Configuration(format!("{} must be at most {}", key, max)));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.parser.max_skills = 10;
        config.output.format = OutputFormat::Console;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[keywords]\ntop_k = 5\nmax_features = 32\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.keywords.top_k, 5);
        assert_eq!(loaded.parser, ParserLimits::default());
        assert_eq!(loaded.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.keywords.top_k = 0;
        config.save_to(&path).unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, CvParserError::Configuration(_)));
    }

    #[test]
    fn test_every_parser_limit_must_be_non_zero() {
        let setters: [fn(&mut ParserLimits); 7] = [
            |l| l.max_skills = 0,
            |l| l.max_education = 0,
            |l| l.max_projects = 0,
            |l| l.max_experiences = 0,
            |l| l.max_achievements = 0,
            |l| l.max_technologies = 0,
            |l| l.max_summary_lines = 0,
        ];

        for set in setters {
            let mut config = Config::default();
            set(&mut config.parser);
            assert!(matches!(config.validate(), Err(CvParserError::Configuration(_))));
        }
    }

    #[test]
    fn test_parser_limits_capped_at_profile_bounds() {
        let setters: [fn(&mut ParserLimits); 7] = [
            |l| l.max_skills = 26,
            |l| l.max_education = 7,
            |l| l.max_projects = 7,
            |l| l.max_experiences = 50,
            |l| l.max_achievements = 6,
            |l| l.max_technologies = 9,
            |l| l.max_summary_lines = 4,
        ];

        for set in setters {
            let mut config = Config::default();
            set(&mut config.parser);
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("at most"));
        }

        let mut config = Config::default();
        config.parser.max_skills = 10;
        config.keywords.top_k = 100;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_tables_use_field_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[parser]\nmax_skills = 10\n\n[keywords]\ntop_k = 5\n\n[output]\nformat = \"console\"\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.parser.max_skills, 10);
        assert_eq!(loaded.parser.max_experiences, ParserLimits::default().max_experiences);
        assert_eq!(loaded.keywords.top_k, 5);
        assert_eq!(loaded.keywords.max_features, 64);
        assert_eq!(loaded.output.format, OutputFormat::Console);
        assert!(loaded.output.pretty_json);
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "parser = 3").unwrap();

        assert!(matches!(Config::load_from(&path), Err(CvParserError::Configuration(_))));
    }
}
