//! Relevance engine entry points

use crate::cancel::CancelToken;
use crate::config::SearchConfig;
use crate::ranking::score_document;
use crate::tokenize::tokenize_query;
use crate::{popular, suggest};
use lacarte::extract::{self, IngredientExtractor};
use lacarte::Document;
use serde::{Deserialize, Serialize};

/// A document together with its relevance for one search call.
///
/// Owns a clone of the matched document; the caller's corpus is never
/// touched. Discarded once the ranked list is consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    /// The matched document
    pub document: Document,

    /// Capped, non-negative relevance
    pub relevance_score: f64,
}

/// Search errors
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The caller cancelled the search; partial results were discarded
    #[error("Search cancelled")]
    Cancelled,

    /// The configured unit vocabulary produced an invalid pattern
    #[error(transparent)]
    Extract(#[from] extract::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Relevance engine over a borrowed corpus.
///
/// Holds configuration and the precompiled ingredient extractor. Nothing
/// derived from a corpus is retained between calls: the engine borrows the
/// corpus for the duration of one call only.
pub struct RelevanceEngine {
    config: SearchConfig,
    extractor: IngredientExtractor,
}

impl RelevanceEngine {
    /// Engine with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(SearchConfig::default())
    }

    /// Build an engine from the given configuration
    pub fn with_config(config: SearchConfig) -> Result<Self> {
        let extractor = IngredientExtractor::new(&config.units)?;
        Ok(Self { config, extractor })
    }

    /// Active configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Rank the corpus against a free-text query.
    ///
    /// Matches come back sorted by descending relevance with zero scores
    /// dropped; ties keep the corpus's relative order. An empty query is the
    /// browse-all path: every document is returned with score 0 in corpus
    /// order, unfiltered.
    pub fn search(&self, corpus: &[Document], query: &str) -> Vec<ScoredDocument> {
        // A token nothing else holds can never be cancelled mid-call.
        self.search_cancellable(corpus, query, &CancelToken::new())
            .unwrap_or_default()
    }

    /// Rank the corpus, aborting when the token is cancelled.
    ///
    /// The token is checked at every document boundary; on cancellation the
    /// partial scan is discarded and `SearchError::Cancelled` is returned.
    pub fn search_cancellable(
        &self,
        corpus: &[Document],
        query: &str,
        cancel: &CancelToken,
    ) -> Result<Vec<ScoredDocument>> {
        let terms = tokenize_query(query);
        tracing::debug!(
            "Searching: q='{}', {} documents, {} terms",
            query,
            corpus.len(),
            terms.len()
        );

        let mut results = Vec::new();
        for doc in corpus {
            if cancel.is_cancelled() {
                return Err(SearchError::Cancelled);
            }

            if terms.is_empty() {
                results.push(ScoredDocument {
                    document: doc.clone(),
                    relevance_score: 0.0,
                });
                continue;
            }

            let ingredient_names = self.extractor.extract(doc);
            let score = score_document(doc, &ingredient_names, &terms, &self.config);
            if score > 0.0 {
                results.push(ScoredDocument {
                    document: doc.clone(),
                    relevance_score: score,
                });
            }
        }

        // Stable sort: equal scores keep corpus order, no secondary key.
        results.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!("Search produced {} results", results.len());
        Ok(results)
    }

    /// Completion suggestions for a partial query.
    ///
    /// Candidates are titles, categories, tags and extracted ingredient
    /// names containing the query, ranked by match position then length.
    pub fn suggest(&self, corpus: &[Document], query: &str, limit: usize) -> Vec<String> {
        suggest::collect(
            corpus,
            &self.extractor,
            query,
            limit,
            self.config.suggestion_min_query_length,
        )
    }

    /// Most popular category and tag labels across the corpus
    pub fn popular_terms(&self, corpus: &[Document], limit: usize) -> Vec<String> {
        popular::popular_terms(corpus, limit)
    }
}

impl Default for RelevanceEngine {
    fn default() -> Self {
        Self::new().expect("default configuration must compile")
    }
}
