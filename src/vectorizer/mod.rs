pub mod analyzer;
pub mod corpus;
pub mod evaluate;
pub mod stop_words;
pub mod term;
pub mod tfidf;

use std::marker::PhantomData;

use num::Float;
use rayon::prelude::*;

use crate::{
    utils::math::vector::ZeroSpVec,
    vectorizer::{corpus::Corpus, tfidf::{DefaultTFIDFEngine, TFIDFEngine}},
};

/// TF-IDF weight vectors of one corpus.
///
/// Row 0 is the focal document, rows 1.. the candidates.
/// Every row is L2-normalized (or zero), so a dot product is a cosine similarity.
///
/// `TFIDFVectorizer<N, E>` has the following generic parameters:
/// - `N`: weight type (`f32` or `f64`)
/// - `E`: TF-IDF calculation engine type (e.g., `DefaultTFIDFEngine`)
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<N = f64, E = DefaultTFIDFEngine>
where
    N: Float,
    E: TFIDFEngine<N>,
{
    /// IDF per vocabulary dimension
    pub idf_vec: Vec<N>,
    /// normalized TF-IDF vector per document
    pub documents: Vec<ZeroSpVec<N>>,
    _marker: PhantomData<E>,
}

impl<N, E> TFIDFVectorizer<N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// Weight every document of `corpus`
    pub fn fit(corpus: &Corpus) -> Self {
        let idf_vec = E::idf_vec(corpus);
        let documents = corpus
            .documents()
            .iter()
            .map(|doc| E::tfidf_vec(doc, corpus.vocab(), &idf_vec))
            .collect();
        Self {
            idf_vec,
            documents,
            _marker: PhantomData,
        }
    }

    /// Same as `fit`, but weights documents on the rayon pool.
    /// Row order and values are identical to `fit`.
    pub fn par_fit(corpus: &Corpus) -> Self {
        let idf_vec = E::idf_vec(corpus);
        let documents = corpus
            .documents()
            .par_iter()
            .map(|doc| E::tfidf_vec(doc, corpus.vocab(), &idf_vec))
            .collect();
        Self {
            idf_vec,
            documents,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn focal(&self) -> &ZeroSpVec<N> {
        &self.documents[0]
    }

    #[inline]
    pub fn candidates(&self) -> &[ZeroSpVec<N>] {
        &self.documents[1..]
    }

    /// Cosine similarity of the focal document with every candidate, in candidate order
    pub fn focal_similarities(&self) -> Vec<f64> {
        let focal = self.focal();
        self.candidates()
            .iter()
            .map(|c| focal.dot(c).to_f64().unwrap_or(0.0))
            .collect()
    }

    /// Same as `focal_similarities`, computed on the rayon pool
    pub fn par_focal_similarities(&self) -> Vec<f64> {
        let focal = self.focal();
        self.candidates()
            .par_iter()
            .map(|c| focal.dot(c).to_f64().unwrap_or(0.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::term::TermFrequency;

    fn corpus() -> Corpus {
        Corpus::new(
            TermFrequency::from(&["red", "leather", "shoes"][..]),
            vec![
                TermFrequency::from(&["red", "leather", "shoes"][..]),
                TermFrequency::from(&["blue", "cotton", "shirt"][..]),
                TermFrequency::new(),
            ],
        )
    }

    #[test]
    fn one_row_per_document() {
        let v: TFIDFVectorizer = TFIDFVectorizer::fit(&corpus());
        assert_eq!(v.documents.len(), 4);
        assert_eq!(v.idf_vec.len(), 6);
        assert_eq!(v.candidates().len(), 3);
    }

    #[test]
    fn similarities_in_candidate_order() {
        let v: TFIDFVectorizer = TFIDFVectorizer::fit(&corpus());
        let sims = v.focal_similarities();
        assert_eq!(sims.len(), 3);
        assert!((sims[0] - 1.0).abs() < 1e-9);
        assert_eq!(sims[1], 0.0);
        assert_eq!(sims[2], 0.0);
    }

    #[test]
    fn parallel_matches_sequential() {
        let c = corpus();
        let seq: TFIDFVectorizer<f32> = TFIDFVectorizer::fit(&c);
        let par: TFIDFVectorizer<f32> = TFIDFVectorizer::par_fit(&c);
        assert_eq!(seq.documents, par.documents);
        assert_eq!(seq.focal_similarities(), par.par_focal_similarities());
    }
}
