//! Recipe document model
//!
//! Read-only input supplied by the content-loading collaborator. The engine
//! clones values into its results and never writes back onto these records.

use serde::{Deserialize, Serialize};

/// One group of ingredient lines as authored in the source content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientSection {
    /// Free-text ingredient lines such as `"200 g flour"`
    #[serde(default)]
    pub items: Vec<String>,
}

/// One searchable content item
///
/// Optional fields deserialize as empty when the content layer omits them;
/// a sparse document is valid input everywhere, never a fault.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document title
    pub title: String,

    /// Short teaser text
    #[serde(default)]
    pub excerpt: Option<String>,

    /// Primary category label
    #[serde(default)]
    pub category: Option<String>,

    /// Free-form tag labels
    #[serde(default)]
    pub tags: Vec<String>,

    /// Structured ingredient list
    #[serde(default)]
    pub ingredient_sections: Vec<IngredientSection>,
}

impl Document {
    /// Excerpt text, empty when absent
    pub fn excerpt_text(&self) -> &str {
        self.excerpt.as_deref().unwrap_or("")
    }

    /// Category label, empty when absent
    pub fn category_text(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }
}
