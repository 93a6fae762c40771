//! Job offer analysis
//! Keyword extraction and enrichment of offer descriptions

pub mod enrich;
pub mod keywords;

pub use enrich::{enrich_offer, infer_company_name, infer_location, OfferEnricher};
pub use keywords::{extract_keywords, KeywordConfig, KeywordExtractor};
