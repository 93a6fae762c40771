//! TF-IDF keyword extraction for job offer descriptions

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Apostrophes joining an elided article to its word.
const ELISION_MARKS: &[char] = &['\'', '\u{2019}'];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Number of keywords returned.
    pub top_k: usize,
    /// Vocabulary size, keeping the most frequent terms.
    pub max_features: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            top_k: 15,
            max_features: 64,
        }
    }
}

pub struct KeywordExtractor {
    stop_words: HashSet<String>,
    config: KeywordConfig,
}

/// Vocabulary and inverse document frequencies fitted on a set of documents.
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    /// Sorted lexicographically; this is also the tie-break order.
    vocabulary: Vec<String>,
    index: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self::with_config(KeywordConfig::default())
    }

    pub fn with_config(config: KeywordConfig) -> Self {
        Self {
            stop_words: Self::create_stop_words(),
            config,
        }
    }

    /// Lowercased words of at least two characters, stop words removed.
    /// Elisions are split off, so `l'équipe` yields `équipe`.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .flat_map(|word| word.split(ELISION_MARKS))
            .map(|word| word.to_lowercase())
            .filter(|word| word.chars().count() >= 2)
            .filter(|word| !self.stop_words.contains(word))
            .collect()
    }

    /// Unigrams followed by bigrams of adjacent tokens.
    pub fn features(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenize(text);
        let bigrams: Vec<String> = tokens.windows(2).map(|pair| pair.join(" ")).collect();
        tokens.into_iter().chain(bigrams).collect()
    }

    /// Fit vocabulary and idf weights over `documents`.
    pub fn fit(&self, documents: &[&str]) -> TfIdfModel {
        let mut term_counts: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for document in documents {
            let features = self.features(document);
            for feature in &features {
                *term_counts.entry(feature.clone()).or_insert(0) += 1;
            }
            let unique: HashSet<&String> = features.iter().collect();
            for feature in unique {
                *doc_freq.entry(feature.clone()).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(String, usize)> = term_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.config.max_features);

        let mut vocabulary: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        vocabulary.sort();

        let n_documents = documents.len() as f64;
        let idf = vocabulary
            .iter()
            .map(|term| {
                let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
                ((1.0 + n_documents) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let index = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        TfIdfModel { vocabulary, index, idf }
    }

    /// Top keywords of `text`, best score first.
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let model = self.fit(&[text]);
        let weights = model.transform(&self.features(text));

        let mut scored: Vec<(&String, f64)> = model.vocabulary.iter().zip(weights).collect();
        // Stable sort keeps vocabulary order among equal scores.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        scored
            .into_iter()
            .filter(|(_, score)| *score > 0.0)
            .take(self.config.top_k)
            .map(|(term, _)| term.clone())
            .collect()
    }

    /// Stop words shared by French and English offers.
    fn create_stop_words() -> HashSet<String> {
        let stop_words = [
            "avec", "pour", "vous", "nous", "les", "des", "une", "dans", "plus", "team", "mission",
        ];

        stop_words.iter().map(|&s| s.to_string()).collect()
    }
}

impl TfIdfModel {
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// L2-normalized tf-idf weights of `features`, aligned with the vocabulary.
    pub fn transform(&self, features: &[String]) -> Vec<f64> {
        let mut weights = vec![0.0; self.vocabulary.len()];
        for feature in features {
            if let Some(&i) = self.index.get(feature) {
                weights[i] += 1.0;
            }
        }

        for (weight, idf) in weights.iter_mut().zip(&self.idf) {
            *weight *= idf;
        }

        let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            weights.iter_mut().for_each(|w| *w /= norm);
        }
        weights
    }
}

/// Extract keywords with the default configuration.
pub fn extract_keywords(text: &str) -> Vec<String> {
    KeywordExtractor::new().extract_keywords(text)
}
