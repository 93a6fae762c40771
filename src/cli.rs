//! CLI interface for the cv parser

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cv-parser")]
#[command(about = "Turn resume text into a structured candidate profile")]
#[command(long_about = "Parse resumes (PDF, TXT, MD) into structured profiles and extract ranked keywords from job offers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a resume file into a candidate profile
    Import {
        /// Path to resume file (PDF, TXT, MD)
        file: PathBuf,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,

        /// Save JSON output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Extract keywords, location and company from a job offer
    Offer {
        /// Path to the offer description (TXT, MD)
        file: PathBuf,

        /// Offer title
        #[arg(short, long)]
        title: Option<String>,

        /// Hiring company, inferred from the text when omitted
        #[arg(long)]
        company: Option<String>,

        /// Job location, inferred from the text when omitted
        #[arg(short, long)]
        location: Option<String>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
