//! Text extraction from various file formats

use crate::error::{Result, CvParserError};
use once_cell::sync::Lazy;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use tokio::fs;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"));

/// Extracted text plus non-fatal remarks about its quality.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub text: String,
    pub warnings: Vec<String>,
}

impl Extraction {
    pub fn new(text: String) -> Self {
        let mut warnings = Vec::new();
        if text.trim().is_empty() {
            warnings.push("No text could be extracted from the document".to_string());
        }
        Self { text, warnings }
    }
}

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<Extraction>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<Extraction> {
        let bytes = fs::read(path).await.map_err(CvParserError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            CvParserError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;

        let mut extraction = Extraction::new(text);
        if !extraction.warnings.is_empty() {
            extraction
                .warnings
                .push("The PDF may be a scanned image; OCR is not supported".to_string());
        }
        Ok(extraction)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<Extraction> {
        let content = fs::read_to_string(path).await.map_err(CvParserError::Io)?;
        Ok(Extraction::new(content))
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<Extraction> {
        let markdown_content = fs::read_to_string(path).await.map_err(CvParserError::Io)?;
        Ok(Extraction::new(markdown_to_text(&markdown_content)))
    }
}

/// Render markdown and strip the markup, one block per line. List items
/// keep a `- ` marker so achievements stay recognisable as bullets.
pub fn markdown_to_text(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    let text = html_output
        .replace("<br />", "\n")
        .replace("</p>", "\n")
        .replace("<li>", "- ");
    let clean_text = HTML_TAG
        .replace_all(&text, "")
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    let lines: Vec<&str> = clean_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text() {
        let markdown = "# Jean Dupont\n\n## Compétences\n\n- **Rust**, Go\n- SQL &amp; NoSQL\n\n## Langues\n\nAnglais : C1\n";
        let text = markdown_to_text(markdown);

        assert!(text.starts_with("Jean Dupont"));
        assert!(text.contains("- Rust, Go\n- SQL & NoSQL"));
        assert!(text.contains("\nLangues\nAnglais : C1"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
        assert!(!text.contains('<'));
    }

    #[test]
    fn test_empty_extraction_warns() {
        assert_eq!(Extraction::new("   ".to_string()).warnings.len(), 1);
        assert!(Extraction::new("Jean".to_string()).warnings.is_empty());
    }
}
