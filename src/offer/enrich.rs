//! Job offer enrichment: keywords, location and company inference

use crate::models::JobOffer;
use crate::offer::keywords::KeywordExtractor;
use crate::parsing::defaults::DEFAULT_OFFER_TITLE;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use strsim::normalized_levenshtein;

pub const COMMON_LOCATIONS: [&str; 12] = [
    "Paris",
    "Lyon",
    "Marseille",
    "Toulouse",
    "Lille",
    "Bordeaux",
    "Nantes",
    "Rennes",
    "Grenoble",
    "Montréal",
    "Genève",
    "Remote",
];

/// Minimum similarity for a word to count as a known location.
const LOCATION_THRESHOLD: f64 = 0.85;

/// Markers introducing the hiring company, most specific first.
const COMPANY_MARKERS: [&[&str]; 4] = [&["chez"], &["au", "sein", "de"], &["for"], &["pour"]];

const ARTICLES: [&str; 10] = ["un", "une", "le", "la", "les", "l'", "des", "a", "an", "the"];

static LOCATION_MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:\bà|\bbased in|\blocation)\s*:?\s+([A-ZÀ-Ü][\w-]+)").expect("Invalid location regex")
});

fn clean_word(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric() && c != '-' && c != '\'')
}

/// Best fuzzy match of a known city among the words of `text`.
fn match_known_location(text: &str) -> Option<&'static str> {
    let words: Vec<&str> = text.split_whitespace().map(clean_word).filter(|w| !w.is_empty()).collect();
    let pairs = words.windows(2).map(|pair| pair.join(" "));
    let candidates: Vec<String> = words.iter().map(|w| w.to_string()).chain(pairs).collect();

    let mut best: Option<(&'static str, f64)> = None;
    for location in COMMON_LOCATIONS {
        let target = location.to_lowercase();
        for candidate in &candidates {
            let score = normalized_levenshtein(&candidate.to_lowercase(), &target);
            if score >= LOCATION_THRESHOLD && best.map_or(true, |(_, s)| score > s) {
                best = Some((location, score));
            }
        }
    }

    best.map(|(location, _)| location)
}

/// Guess the job location from an offer description.
pub fn infer_location(text: &str) -> Option<String> {
    if let Some(location) = match_known_location(text) {
        return Some(location.to_string());
    }

    LOCATION_MENTION
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Guess the hiring company: the word following a marker such as "chez".
pub fn infer_company_name(text: &str) -> Option<String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let lowered: Vec<String> = tokens.iter().map(|t| clean_word(t).to_lowercase()).collect();

    for marker in COMPANY_MARKERS {
        let found = lowered
            .windows(marker.len())
            .position(|window| window.iter().zip(marker).all(|(word, expected)| word.as_str() == *expected));

        if let Some(start) = found {
            let name = tokens[start + marker.len()..]
                .iter()
                .map(|token| clean_word(token))
                .find(|word| !word.is_empty() && !ARTICLES.contains(&word.to_lowercase().as_str()));
            if let Some(name) = name {
                return Some(name.to_string());
            }
        }
    }

    None
}

/// Offer enrichment with a reusable keyword extractor.
pub struct OfferEnricher {
    extractor: KeywordExtractor,
}

impl Default for OfferEnricher {
    fn default() -> Self {
        Self::new(KeywordExtractor::new())
    }
}

impl OfferEnricher {
    pub fn new(extractor: KeywordExtractor) -> Self {
        Self { extractor }
    }

    /// Fill keywords, and location/company when the offer lacks them.
    pub fn enrich(&self, offer: JobOffer) -> JobOffer {
        let keywords = self.extractor.extract_keywords(&offer.description);
        let location = offer.location.or_else(|| infer_location(&offer.description));
        let company = offer.company.or_else(|| infer_company_name(&offer.description));
        let title = if offer.title.trim().is_empty() {
            DEFAULT_OFFER_TITLE.to_string()
        } else {
            offer.title
        };

        debug!(
            "Enriched offer '{}': {} keywords, location {:?}, company {:?}",
            title,
            keywords.len(),
            location,
            company
        );

        JobOffer {
            id: offer.id,
            title,
            company,
            description: offer.description,
            location,
            keywords,
        }
    }
}

pub fn enrich_offer(offer: JobOffer) -> JobOffer {
    OfferEnricher::default().enrich(offer)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFER: &str = "Nous recherchons un développeur Python pour un poste à Paris chez Acme";

    #[test]
    fn test_infer_location_known_city() {
        assert_eq!(infer_location(OFFER).as_deref(), Some("Paris"));
        assert_eq!(infer_location("Poste basé à lyon, télétravail partiel").as_deref(), Some("Lyon"));
        assert_eq!(infer_location("Poste à Montreal").as_deref(), Some("Montréal"));
    }

    #[test]
    fn test_infer_location_from_mention() {
        assert_eq!(infer_location("Job based in Berlin, Germany").as_deref(), Some("Berlin"));
        assert_eq!(infer_location("Aucune indication"), None);
    }

    #[test]
    fn test_infer_company_name() {
        assert_eq!(infer_company_name(OFFER).as_deref(), Some("Acme"));
        assert_eq!(
            infer_company_name("Rejoignez l'équipe au sein de Globex, leader du secteur").as_deref(),
            Some("Globex")
        );
        assert_eq!(infer_company_name("Backend engineer for the Initech platform").as_deref(), Some("Initech"));
        assert_eq!(infer_company_name("Développeur Rust"), None);
    }

    #[test]
    fn test_enrich_offer() {
        let offer = JobOffer::new("", OFFER);
        let enriched = enrich_offer(offer.clone());

        assert_eq!(enriched.id, offer.id);
        assert_eq!(enriched.title, DEFAULT_OFFER_TITLE);
        assert_eq!(enriched.location.as_deref(), Some("Paris"));
        assert_eq!(enriched.company.as_deref(), Some("Acme"));
        assert!(enriched
            .keywords
            .iter()
            .any(|k| k.eq_ignore_ascii_case("python") || k == "développeur"));
    }

    #[test]
    fn test_enrich_keeps_given_fields() {
        let mut offer = JobOffer::new("Dev Rust", OFFER);
        offer.location = Some("Remote".to_string());
        offer.company = Some("Initech".to_string());

        let enriched = enrich_offer(offer);
        assert_eq!(enriched.title, "Dev Rust");
        assert_eq!(enriched.location.as_deref(), Some("Remote"));
        assert_eq!(enriched.company.as_deref(), Some("Initech"));
    }
}
