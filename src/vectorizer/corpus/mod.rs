use ahash::RandomState;
use indexmap::IndexMap;

use crate::vectorizer::term::TermFrequency;

/// Distinct terms of one corpus, mapped to their dimension and document frequency.
/// The dimension of a term is its insertion index.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    doc_freq: IndexMap<Box<str>, u64, RandomState>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self {
            doc_freq: IndexMap::with_hasher(RandomState::new()),
        }
    }

    /// Count one document's distinct terms
    fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        for term in terms {
            *self.doc_freq.entry(term.as_ref().into()).or_insert(0) += 1;
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.doc_freq.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.doc_freq.is_empty()
    }

    /// Dimension of a term
    #[inline]
    pub fn dim(&self, term: &str) -> Option<usize> {
        self.doc_freq.get_index_of(term)
    }

    /// Number of documents containing `term` at least once
    #[inline]
    pub fn doc_freq(&self, term: &str) -> u64 {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    /// `(term, df)` in dimension order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.doc_freq.iter().map(|(t, &df)| (t.as_ref(), df))
    }
}

/// The documents of one ranking request.
/// Position 0 is the focal document, 1.. are candidates in caller order.
///
/// Built fresh for every request and dropped with it.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<TermFrequency>,
    vocab: Vocabulary,
}

impl Corpus {
    /// Build from the focal document followed by the candidates
    pub fn new(focal: TermFrequency, candidates: Vec<TermFrequency>) -> Self {
        let mut documents = Vec::with_capacity(candidates.len() + 1);
        documents.push(focal);
        documents.extend(candidates);

        let mut vocab = Vocabulary::new();
        for doc in &documents {
            vocab.add_set(&doc.term_set_ref_str());
        }
        Self { documents, vocab }
    }

    /// Number of documents, focal included. Always at least 1.
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.documents.len() as u64
    }

    #[inline]
    pub fn focal(&self) -> &TermFrequency {
        &self.documents[0]
    }

    #[inline]
    pub fn candidates(&self) -> &[TermFrequency] {
        &self.documents[1..]
    }

    #[inline]
    pub fn documents(&self) -> &[TermFrequency] {
        &self.documents
    }

    #[inline]
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }
}
