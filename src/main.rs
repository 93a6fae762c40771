//! cv-parser: turn resumes into structured candidate profiles

use anyhow::{Context, Result};
use clap::Parser;
use cv_parser::cli::{self, Cli, Commands, ConfigAction};
use cv_parser::config::{Config, OutputFormat};
use cv_parser::input::InputManager;
use cv_parser::models::{ExtractionPayload, JobOffer};
use cv_parser::offer::{KeywordExtractor, OfferEnricher};
use cv_parser::output::{formatter_for, JsonFormatter, OutputFormatter};
use cv_parser::parsing::ProfileParser;
use cv_parser::CvParserError;
use log::{error, info};
use std::path::Path;
use std::process;

const RESUME_EXTENSIONS: &[&str] = &["pdf", "txt", "text", "md", "markdown"];
const OFFER_EXTENSIONS: &[&str] = &["txt", "text", "md", "markdown"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Import { file, output, save } => {
            info!("Importing resume {}", file.display());

            cli::validate_file_extension(&file, RESUME_EXTENSIONS)
                .map_err(|e| CvParserError::InvalidInput(format!("Resume file: {}", e)))?;
            let format = resolve_format(output.as_deref(), &config)?;

            eprintln!("📄 Resume: {}", file.display());

            let mut input_manager = InputManager::new();
            let extraction = input_manager
                .extract(&file)
                .await
                .with_context(|| format!("Could not read resume {}", file.display()))?;

            let parser = ProfileParser::with_limits(config.parser.clone());
            let profile = parser.parse(&extraction.text);

            eprintln!(
                "✅ Parsed {} experiences, {} education entries, {} skills",
                profile.experiences.len(),
                profile.education.len(),
                profile.skills.len()
            );

            let payload = ExtractionPayload {
                profile,
                raw_text: extraction.text,
                warnings: extraction.warnings,
            };

            let formatter = formatter_for(format, &config.output);
            println!("{}", formatter.format_payload(&payload)?);

            if let Some(save_path) = save {
                save_payload(&payload, &save_path, config.output.pretty_json)?;
                eprintln!("💾 Saved profile to {}", save_path.display());
            }
        }

        Commands::Offer {
            file,
            title,
            company,
            location,
            output,
        } => {
            info!("Analyzing job offer {}", file.display());

            cli::validate_file_extension(&file, OFFER_EXTENSIONS)
                .map_err(|e| CvParserError::InvalidInput(format!("Offer file: {}", e)))?;
            let format = resolve_format(output.as_deref(), &config)?;

            let mut input_manager = InputManager::new();
            let description = input_manager
                .extract_text(&file)
                .await
                .with_context(|| format!("Could not read offer {}", file.display()))?;

            let mut offer = JobOffer::new(title.unwrap_or_default(), description);
            offer.company = company;
            offer.location = location;

            let enricher = OfferEnricher::new(KeywordExtractor::with_config(config.keywords.clone()));
            let offer = enricher.enrich(offer);

            eprintln!("🔑 Extracted {} keywords", offer.keywords.len());

            let formatter = formatter_for(format, &config.output);
            println!("{}", formatter.format_offer(&offer)?);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config).context("Could not render configuration")?;
                println!("⚙️  Current Configuration\n");
                println!("{}", content);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }
        },
    }

    Ok(())
}

/// Command-line flag wins over the configured default.
fn resolve_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(value) => Ok(cli::parse_output_format(value).map_err(CvParserError::InvalidInput)?),
        None => Ok(config.output.format),
    }
}

fn save_payload(payload: &ExtractionPayload, path: &Path, pretty: bool) -> Result<()> {
    let json = JsonFormatter::new(pretty).format_payload(payload)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json).with_context(|| format!("Could not write {}", path.display()))?;
    Ok(())
}
