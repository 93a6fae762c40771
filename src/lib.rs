//! CV parser library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod offer;
pub mod output;
pub mod parsing;

pub use config::Config;
pub use error::{CvParserError, Result};
pub use models::{CandidateProfile, ExtractionPayload, JobOffer};
pub use offer::{enrich_offer, extract_keywords};
pub use parsing::parse_candidate_profile;
