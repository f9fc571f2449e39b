use num::Float;

use crate::{
    utils::math::vector::ZeroSpVec,
    vectorizer::{corpus::{Corpus, Vocabulary}, term::TermFrequency},
};

/// TF-IDF calculation strategy.
///
/// Plug a different weighting into `SimilarityRanker` by implementing this.
pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// IDF for every vocabulary term, in dimension order
    ///
    /// # Arguments
    /// * `corpus` - the request corpus
    fn idf_vec(corpus: &Corpus) -> Vec<N>;

    /// Sparse TF vector of one document over the corpus vocabulary
    ///
    /// # Arguments
    /// * `freq` - term counts of the document
    /// * `vocab` - the corpus vocabulary
    fn tf_vec(freq: &TermFrequency, vocab: &Vocabulary) -> ZeroSpVec<N>;

    /// L2-normalized TF-IDF vector. A document without terms gives a zero vector.
    fn tfidf_vec(freq: &TermFrequency, vocab: &Vocabulary, idf: &[N]) -> ZeroSpVec<N> {
        let mut vec = Self::tf_vec(freq, vocab).hadamard_dense(idf);
        vec.normalize();
        vec
    }
}

/// Default TF-IDF engine
///
/// - tf(t, d) = count(t, d) / |d|
/// - idf(t) = ln((1 + n_docs) / (1 + df(t))) + 1
///
/// The smoothed IDF stays strictly positive, even for a term present in every document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    #[inline]
    pub fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }
}

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float,
{
    fn idf_vec(corpus: &Corpus) -> Vec<N> {
        let doc_num = corpus.doc_num();
        corpus
            .vocab()
            .iter()
            .map(|(_, df)| N::from(Self::idf(doc_num, df)).unwrap_or_else(N::zero))
            .collect()
    }

    fn tf_vec(freq: &TermFrequency, vocab: &Vocabulary) -> ZeroSpVec<N> {
        let total = freq.term_sum();
        let mut entries: Vec<(usize, N)> = Vec::with_capacity(freq.term_num());
        if total > 0 {
            for (term, count) in freq.iter() {
                // terms outside the vocabulary have no dimension
                if let Some(dim) = vocab.dim(term) {
                    let tf = count as f64 / total as f64;
                    entries.push((dim, N::from(tf).unwrap_or_else(N::zero)));
                }
            }
        }
        entries.sort_unstable_by_key(|&(dim, _)| dim);

        let mut tf_vec = ZeroSpVec::with_len(vocab.len());
        for (dim, tf) in entries {
            tf_vec.raw_push(dim, tf);
        }
        tf_vec
    }
}
