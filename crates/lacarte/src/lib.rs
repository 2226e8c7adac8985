// lacarte - Document Model & Field Extraction
//
// *La Carte* (The Menu) - Recipe document model with ingredient-aware field extraction

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

//! Recipe document model and searchable-field extraction.
//!
//! Documents are read-only input owned by the content-loading layer. This
//! crate defines their shape and derives searchable field values from them,
//! most notably the bare ingredient names hidden inside free-text lines such
//! as `"200 g flour"`.

pub mod document;
pub mod extract;

pub use document::{Document, IngredientSection};
pub use extract::{extract_ingredient_names, IngredientExtractor, DEFAULT_UNITS};

/// Library initialization
pub fn init() {
    let _ = tracing::subscriber::set_default(tracing::subscriber::NoSubscriber::default());
}
