//! Error handling for the cv parser
//!
//! Only the edges of the crate can fail (file extraction, configuration,
//! serialization). The parsing core always produces a usable value.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvParserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CvParserError>;

/// Convert toml parse errors to our custom error type
impl From<toml::de::Error> for CvParserError {
    fn from(err: toml::de::Error) -> Self {
        CvParserError::Configuration(format!("Failed to parse config: {}", err))
    }
}

/// Convert toml serialization errors to our custom error type
impl From<toml::ser::Error> for CvParserError {
    fn from(err: toml::ser::Error) -> Self {
        CvParserError::Configuration(format!("Failed to serialize config: {}", err))
    }
}
