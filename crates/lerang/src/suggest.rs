//! Suggestion generation
//!
//! Draws candidate completions from the corpus itself: titles, categories,
//! tags and extracted ingredient names containing the partial query.

use lacarte::extract::IngredientExtractor;
use lacarte::Document;
use std::collections::HashSet;

/// A candidate with its sort keys: match position, then character length.
type Candidate = (usize, usize, String);

fn consider(
    value: &str,
    needle: &str,
    seen: &mut HashSet<String>,
    out: &mut Vec<Candidate>,
) {
    let lowered = value.to_lowercase();
    let Some(position) = lowered.find(needle) else {
        return;
    };
    // Dedup is case-insensitive; the first-seen stored form is returned.
    if !seen.insert(lowered) {
        return;
    }
    out.push((position, value.chars().count(), value.to_string()));
}

/// Collect up to `limit` completion candidates containing the query.
///
/// Queries shorter than `min_query_length` characters (after trimming)
/// produce no suggestions. Earlier match positions rank first, shorter
/// candidates break position ties.
pub fn collect(
    corpus: &[Document],
    extractor: &IngredientExtractor,
    query: &str,
    limit: usize,
    min_query_length: usize,
) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    if needle.chars().count() < min_query_length {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut candidates: Vec<Candidate> = Vec::new();

    for doc in corpus {
        consider(&doc.title, &needle, &mut seen, &mut candidates);
        if let Some(category) = &doc.category {
            consider(category, &needle, &mut seen, &mut candidates);
        }
        for tag in &doc.tags {
            consider(tag, &needle, &mut seen, &mut candidates);
        }
        for name in extractor.extract(doc) {
            consider(&name, &needle, &mut seen, &mut candidates);
        }
    }

    candidates.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));
    candidates.truncate(limit);
    candidates.into_iter().map(|(_, _, value)| value).collect()
}
