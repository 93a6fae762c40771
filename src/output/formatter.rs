//! Output formatters for parsed profiles and enriched offers

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::models::{CandidateProfile, ExtractionPayload, JobOffer};
use colored::{Color, Colorize};

/// Trait for rendering parser results
pub trait OutputFormatter {
    fn format_payload(&self, payload: &ExtractionPayload) -> Result<String>;
    fn format_offer(&self, offer: &JobOffer) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Human readable summary with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// camelCase JSON, the shape the desktop front-end consumes
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".color(Color::Green).bold(), title.color(Color::Green).bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }

    fn field(&self, label: &str, value: Option<&str>) -> String {
        let value = value.unwrap_or("-");
        format!("  {}: {}\n", self.colorize(label, Color::Cyan), value)
    }

    fn format_profile(&self, profile: &CandidateProfile) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header(&profile.full_name));
        output.push_str(&self.field("Email", profile.email.as_deref()));
        output.push_str(&self.field("Phone", profile.phone.as_deref()));
        output.push_str(&self.field("Summary", profile.summary.as_deref()));

        output.push_str(&self.format_header("Skills"));
        output.push_str(&format!("  {}\n", profile.skills.join(", ")));

        output.push_str(&self.format_header("Experiences"));
        for exp in &profile.experiences {
            let end = exp.end_date.as_deref().unwrap_or("ongoing");
            output.push_str(&format!(
                "  • {} - {} ({} → {})\n",
                self.colorize(&exp.company, Color::Yellow),
                exp.role,
                exp.start_date,
                end
            ));
            for achievement in &exp.achievements {
                output.push_str(&format!("      - {}\n", achievement));
            }
            if !exp.technologies.is_empty() {
                output.push_str(&format!("      Technologies: {}\n", exp.technologies.join(", ")));
            }
        }

        output.push_str(&self.format_header("Education"));
        for edu in &profile.education {
            let end = edu.end_date.as_deref().unwrap_or("ongoing");
            output.push_str(&format!(
                "  • {} - {} ({} → {})\n",
                self.colorize(&edu.school, Color::Yellow),
                edu.degree,
                edu.start_date,
                end
            ));
        }

        if !profile.projects.is_empty() {
            output.push_str(&self.format_header("Projects"));
            for project in &profile.projects {
                output.push_str(&format!("  • {}: {}", project.name, project.description));
                if let Some(url) = &project.url {
                    output.push_str(&format!(" <{}>", url));
                }
                output.push('\n');
            }
        }

        if !profile.languages.is_empty() {
            output.push_str(&self.format_header("Languages"));
            for language in &profile.languages {
                output.push_str(&format!("  • {} ({})\n", language.label, language.level));
            }
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_payload(&self, payload: &ExtractionPayload) -> Result<String> {
        let mut output = self.format_profile(&payload.profile);

        if !payload.warnings.is_empty() {
            output.push_str(&self.format_header("Warnings"));
            for warning in &payload.warnings {
                output.push_str(&format!("  {} {}\n", self.colorize("!", Color::Red), warning));
            }
        }

        Ok(output)
    }

    fn format_offer(&self, offer: &JobOffer) -> Result<String> {
        let mut output = String::new();
        output.push_str(&self.format_header(&offer.title));
        output.push_str(&self.field("Company", offer.company.as_deref()));
        output.push_str(&self.field("Location", offer.location.as_deref()));
        output.push_str(&self.format_header("Keywords"));
        for (rank, keyword) in offer.keywords.iter().enumerate() {
            output.push_str(&format!("  {:>2}. {}\n", rank + 1, keyword));
        }
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_payload(&self, payload: &ExtractionPayload) -> Result<String> {
        self.to_json(payload)
    }

    fn format_offer(&self, offer: &JobOffer) -> Result<String> {
        self.to_json(offer)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Pick the formatter for `format`, honouring the output settings.
pub fn formatter_for(format: OutputFormat, config: &OutputConfig) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(config.color_output)),
        OutputFormat::Json => Box::new(JsonFormatter::new(config.pretty_json)),
    }
}
