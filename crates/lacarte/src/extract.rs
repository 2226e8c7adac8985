//! Ingredient field extraction
//!
//! Strips quantity and measurement-unit tokens from free-text ingredient
//! lines so the bare ingredient names become searchable field values.
//! Patterns are compiled once at construction, never per call.

use crate::document::Document;
use once_cell::sync::Lazy;
use regex::Regex;

/// Measurement unit tokens stripped during extraction.
///
/// Drawn from the Swedish-language source content; matched whole-token and
/// case-insensitively.
pub const DEFAULT_UNITS: &[&str] = &[
    "g", "kg", "ml", "l", "dl", "cl", "tsk", "msk", "st", "stycken", "krm", "pkt", "burk",
    "flaska",
];

/// Extraction errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The unit vocabulary produced an invalid pattern
    #[error("Invalid unit pattern: {0}")]
    InvalidPattern(String),
}

/// Strips quantities and unit tokens from ingredient lines.
pub struct IngredientExtractor {
    /// Matches numeric quantities, including decimal forms with `.` or `,`
    quantity_pattern: Regex,

    /// Matches vocabulary units as whole tokens, case-insensitively
    unit_pattern: Regex,
}

impl IngredientExtractor {
    /// Build an extractor for the given unit vocabulary
    pub fn new<S: AsRef<str>>(units: &[S]) -> Result<Self, Error> {
        let mut escaped: Vec<String> = units.iter().map(|u| regex::escape(u.as_ref())).collect();
        // Longest alternatives first so "stycken" wins over "st"
        escaped.sort_by(|a, b| b.len().cmp(&a.len()));

        let unit_source = if escaped.is_empty() {
            // A class that can never match: empty vocabulary strips nothing
            r"[^\s\S]".to_string()
        } else {
            format!(r"(?i)\b(?:{})\b", escaped.join("|"))
        };

        let quantity_pattern = Regex::new(r"\d+(?:[.,]\d+)?")
            .map_err(|e| Error::InvalidPattern(e.to_string()))?;
        let unit_pattern =
            Regex::new(&unit_source).map_err(|e| Error::InvalidPattern(e.to_string()))?;

        Ok(Self {
            quantity_pattern,
            unit_pattern,
        })
    }

    /// Extract bare ingredient names from every section of a document.
    ///
    /// Sections are flattened in order; items that strip down to nothing
    /// (pure quantity/unit lines) are dropped. Absent sections yield an
    /// empty list.
    pub fn extract(&self, doc: &Document) -> Vec<String> {
        let mut names = Vec::new();
        for section in &doc.ingredient_sections {
            for item in &section.items {
                let name = self.strip(item);
                if !name.is_empty() {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Strip quantity and unit tokens from one ingredient line
    pub fn strip(&self, item: &str) -> String {
        let without_digits = self.quantity_pattern.replace_all(item, " ");
        let without_units = self.unit_pattern.replace_all(&without_digits, " ");
        without_units.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for IngredientExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_UNITS).expect("default unit vocabulary must compile")
    }
}

/// Shared extractor built from the default vocabulary
static DEFAULT_EXTRACTOR: Lazy<IngredientExtractor> = Lazy::new(IngredientExtractor::default);

/// Extract ingredient names from a document with the default unit vocabulary
pub fn extract_ingredient_names(doc: &Document) -> Vec<String> {
    DEFAULT_EXTRACTOR.extract(doc)
}
