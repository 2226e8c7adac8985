//! Engine configuration
//!
//! Every tunable the engine consults is a named field here; scoring code
//! reads weights and thresholds from these structs, never from literals.

use lacarte::DEFAULT_UNITS;
use serde::{Deserialize, Serialize};

/// Scoring weights for each matchable field.
///
/// The multi-field bonus is a ranking heuristic: tuning any of these values
/// is allowed, but the bonus stays additive and applies only when more than
/// one distinct field matched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldWeights {
    /// Title equals the term exactly
    pub title_exact: f64,

    /// Title contains the term
    pub title_substring: f64,

    /// Scale applied to similarity on a fuzzy title match
    pub title_fuzzy_scale: f64,

    /// Category contains the term
    pub category_substring: f64,

    /// A tag equals the term exactly
    pub tag_exact: f64,

    /// A tag contains the term
    pub tag_substring: f64,

    /// An ingredient name contains the term
    pub ingredient_substring: f64,

    /// Scale applied to similarity on a fuzzy ingredient match
    pub ingredient_fuzzy_scale: f64,

    /// Excerpt contains the term
    pub excerpt_substring: f64,

    /// Per-field bonus added when more than one distinct field matched
    pub multi_field_bonus: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title_exact: 40.0,
            title_substring: 30.0,
            title_fuzzy_scale: 20.0,
            category_substring: 15.0,
            tag_exact: 12.0,
            tag_substring: 8.0,
            ingredient_substring: 10.0,
            ingredient_fuzzy_scale: 8.0,
            excerpt_substring: 5.0,
            multi_field_bonus: 2.0,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Minimum similarity for a fuzzy title match to contribute score
    pub title_fuzzy_threshold: f64,

    /// Minimum similarity for a fuzzy ingredient match
    pub ingredient_fuzzy_threshold: f64,

    /// Score clamp ceiling
    pub max_score: f64,

    /// Minimum query length, in characters, before suggestions are generated
    pub suggestion_min_query_length: usize,

    /// Unit tokens stripped during ingredient extraction
    pub units: Vec<String>,

    /// Field scoring weights
    pub weights: FieldWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            title_fuzzy_threshold: 0.7,
            ingredient_fuzzy_threshold: 0.8,
            max_score: 100.0,
            suggestion_min_query_length: 2,
            units: DEFAULT_UNITS.iter().map(|u| u.to_string()).collect(),
            weights: FieldWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Set custom fuzzy thresholds
    pub fn with_thresholds(mut self, title: f64, ingredient: f64) -> Self {
        self.title_fuzzy_threshold = title;
        self.ingredient_fuzzy_threshold = ingredient;
        self
    }

    /// Set custom field weights
    pub fn with_weights(mut self, weights: FieldWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the unit vocabulary used for ingredient extraction
    pub fn with_units<S: Into<String>>(mut self, units: Vec<S>) -> Self {
        self.units = units.into_iter().map(Into::into).collect();
        self
    }

    /// Set the score clamp ceiling
    pub fn with_max_score(mut self, max_score: f64) -> Self {
        self.max_score = max_score;
        self
    }
}
