/// This crate is a content-based product recommender using request-scoped TF-IDF vectors.
pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod ranker;
pub mod utils;
pub mod vectorizer;

/// Similarity Ranker
/// The top-level struct of this crate.
/// Given a focal document and a pool of candidates, it ranks the candidates
/// by cosine similarity of their TF-IDF vectors to the focal document.
///
/// Every call builds its own vocabulary and vectors:
/// - The corpus is `[focal] + candidates`
/// - Terms are lowercase alphabetic runs minus stop words
/// - IDF is smoothed: `ln((1 + n) / (1 + df)) + 1`
/// - Vectors are L2-normalized, so similarity is a dot product
///
/// `SimilarityRanker<N, E>` has the following generic parameters:
/// - `N`: weight type (`f32` or `f64`)
/// - `E`: TF-IDF calculation engine type (e.g., `DefaultTFIDFEngine`)
///
/// # Thread Safety
/// The ranker holds no mutable state and is `Send + Sync`.
pub use ranker::SimilarityRanker;

/// Document
/// An item's text (name + description) and its catalog id.
pub use document::Document;

/// Ranking results
/// - `Hits`: ordered list of results
/// - `HitEntry`: one result, with its key and score
pub use vectorizer::evaluate::scoring::{HitEntry, Hits};

/// Term Frequency structure
/// Counts of each term in one document plus the total term count.
/// Used as base data for TF (Term Frequency) calculation.
pub use vectorizer::term::TermFrequency;

/// Corpus and vocabulary of one ranking request.
/// Used as the base data for IDF (Inverse Document Frequency) calculation.
pub use vectorizer::corpus::{Corpus, Vocabulary};

/// TF IDF Calculation Engine Trait
/// By implementing this trait, you can plug different TF-IDF calculation strategies
/// into `SimilarityRanker<N, E>`.
/// `DefaultTFIDFEngine` computes `count / total` TF and smoothed IDF.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Text analyzer (tokenizer + stop-word filter)
pub use vectorizer::analyzer::Analyzer;

pub use catalog::{CatalogStore, InMemoryCatalog, Product, Recommender};
pub use config::{AnalyzerConfig, RankerConfig, StopWords};
pub use error::{RankError, Result};
