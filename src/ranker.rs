//! Content-based similarity ranking of candidate products against a focal product.

use std::marker::PhantomData;

use num::Float;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{
    config::RankerConfig,
    document::Document,
    error::{RankError, Result},
    vectorizer::{
        analyzer::Analyzer,
        corpus::Corpus,
        evaluate::scoring::{HitEntry, Hits},
        term::TermFrequency,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        TFIDFVectorizer,
    },
};

/// Ranks candidates by TF-IDF cosine similarity to a focal document.
///
/// Stateless between calls: every call builds its own vocabulary and vectors
/// and drops them on return, so one ranker can serve any number of threads.
#[derive(Debug, Clone)]
pub struct SimilarityRanker<N = f64, E = DefaultTFIDFEngine> {
    analyzer: Analyzer,
    parallel_threshold: usize,
    _marker: PhantomData<fn() -> (N, E)>,
}

impl SimilarityRanker {
    /// Ranker with the built-in English analyzer and f64 weights
    pub fn english() -> Self {
        Self::new(&RankerConfig::default())
    }
}

impl Default for SimilarityRanker {
    fn default() -> Self {
        Self::english()
    }
}

impl<N, E> SimilarityRanker<N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N>,
{
    pub fn new(config: &RankerConfig) -> Self {
        Self {
            analyzer: Analyzer::new(&config.analyzer),
            parallel_threshold: config.parallel_threshold,
            _marker: PhantomData,
        }
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Rank `candidates` against `focal`.
    ///
    /// Returns at most `top_k` `(candidate index, score)` hits, by descending
    /// score. Ties keep the candidate order. Scores `<= 0` are never returned.
    /// Indices point into `candidates`.
    ///
    /// # Errors
    /// `RankError::InvalidArgument` when `top_k == 0`.
    pub fn rank<K>(
        &self,
        focal: &Document<K>,
        candidates: &[Document<K>],
        top_k: usize,
    ) -> Result<Hits<usize>> {
        check_top_k(top_k)?;
        let texts: Vec<String> = candidates.iter().map(Document::text).collect();
        self.rank_texts(&focal.text(), &texts, top_k)
    }

    /// Same as `rank`, on raw texts
    pub fn rank_texts<S>(&self, focal: &str, candidates: &[S], top_k: usize) -> Result<Hits<usize>>
    where
        S: AsRef<str> + Sync,
    {
        check_top_k(top_k)?;
        if candidates.is_empty() {
            debug!(top_k, "no candidates to rank");
            return Ok(Hits::default());
        }

        let parallel = candidates.len() >= self.parallel_threshold;
        let focal_freq = self.analyzer.analyze(focal);
        let candidate_freqs: Vec<TermFrequency> = if parallel {
            candidates
                .par_iter()
                .map(|text| self.analyzer.analyze(text.as_ref()))
                .collect()
        } else {
            candidates
                .iter()
                .map(|text| self.analyzer.analyze(text.as_ref()))
                .collect()
        };
        trace!(focal_terms = focal_freq.term_sum(), "analyzed corpus");

        let corpus = Corpus::new(focal_freq, candidate_freqs);
        let scores = if parallel {
            TFIDFVectorizer::<N, E>::par_fit(&corpus).par_focal_similarities()
        } else {
            TFIDFVectorizer::<N, E>::fit(&corpus).focal_similarities()
        };

        let mut hits = Hits::new(
            scores
                .into_iter()
                .enumerate()
                .map(|(key, score)| HitEntry { key, score })
                .collect(),
        );
        hits.sort_by_score_desc().retain_positive().truncate(top_k);

        debug!(
            candidates = candidates.len(),
            vocab = corpus.vocab().len(),
            parallel,
            hits = hits.len(),
            top_k,
            "ranked candidates"
        );
        Ok(hits)
    }

    /// Rank and map the hits back to candidate ids
    pub fn recommend<K>(
        &self,
        focal: &Document<K>,
        candidates: &[Document<K>],
        top_k: usize,
    ) -> Result<Hits<K>>
    where
        K: Clone,
    {
        let hits = self.rank(focal, candidates, top_k)?;
        Ok(hits.map_keys(|idx| candidates[idx].id.clone()))
    }
}

fn check_top_k(top_k: usize) -> Result<()> {
    if top_k == 0 {
        return Err(RankError::InvalidArgument("top_k must be at least 1".to_string()));
    }
    Ok(())
}
