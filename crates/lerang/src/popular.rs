//! Popularity ranking
//!
//! Query-independent weighted term frequency over the whole corpus. Built
//! once per corpus snapshot and recomputed when the corpus changes; nothing
//! is updated incrementally.

use lacarte::Document;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Weight added for each category occurrence
const CATEGORY_WEIGHT: u32 = 3;

/// Weight added for each tag occurrence
const TAG_WEIGHT: u32 = 2;

/// One term with its accumulated popularity weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularityEntry {
    /// Category or tag label as stored in the corpus
    pub term: String,

    /// Weighted occurrence count
    pub weight: u32,
}

fn bump(
    term: &str,
    weight: u32,
    index: &mut HashMap<String, usize>,
    entries: &mut Vec<PopularityEntry>,
) {
    if let Some(&i) = index.get(term) {
        entries[i].weight += weight;
    } else {
        index.insert(term.to_string(), entries.len());
        entries.push(PopularityEntry {
            term: term.to_string(),
            weight,
        });
    }
}

/// Accumulate weighted category and tag counts across the corpus.
///
/// Categories weigh 3, tags weigh 2. The result is sorted by weight
/// descending; equal weights keep first-seen corpus order.
pub fn accumulate(corpus: &[Document]) -> Vec<PopularityEntry> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<PopularityEntry> = Vec::new();

    for doc in corpus {
        if let Some(category) = &doc.category {
            if !category.is_empty() {
                bump(category, CATEGORY_WEIGHT, &mut index, &mut entries);
            }
        }
        for tag in &doc.tags {
            if !tag.is_empty() {
                bump(tag, TAG_WEIGHT, &mut index, &mut entries);
            }
        }
    }

    // Stable sort keeps first-seen order for equal weights.
    entries.sort_by(|a, b| b.weight.cmp(&a.weight));
    entries
}

/// The top `limit` popular term labels
pub fn popular_terms(corpus: &[Document], limit: usize) -> Vec<String> {
    accumulate(corpus)
        .into_iter()
        .take(limit)
        .map(|entry| entry.term)
        .collect()
}
