//! Query tokenization

/// Split a raw query into normalized search terms.
///
/// Lowercases the input, trims it, splits on runs of whitespace and drops
/// empty tokens. An empty or whitespace-only query yields no terms. Repeated
/// terms are kept: each occurrence contributes to the additive score on its
/// own.
pub fn tokenize_query(query: &str) -> Vec<String> {
    query
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
