// lerang - Relevance Ranking Engine
//
// *Le Rang* (The Rank) - Weighted multi-field relevance with typo-tolerant
// fuzzy matching, completion suggestions, and popularity ranking

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

//! Search relevance engine over a borrowed recipe corpus.
//!
//! Every entry point is a pure function of `(corpus, parameters)`: the engine
//! holds configuration and a precompiled ingredient extractor, never state
//! derived from a corpus, so concurrent calls are safe as long as the caller
//! does not mutate the corpus mid-call.

pub mod cancel;
pub mod config;
pub mod engine;
pub mod fuzzy;
pub mod popular;
pub mod ranking;
pub mod suggest;
pub mod tokenize;

pub use cancel::CancelToken;
pub use config::{FieldWeights, SearchConfig};
pub use engine::{RelevanceEngine, ScoredDocument, SearchError};
pub use popular::PopularityEntry;

/// Library initialization
pub fn init() {
    let _ = tracing::subscriber::set_default(tracing::subscriber::NoSubscriber::default());
}
