use std::collections::HashSet;

use ahash::RandomState;

use crate::config::{AnalyzerConfig, StopWords};
use crate::vectorizer::stop_words::ENGLISH_STOP_WORDS;
use crate::vectorizer::term::TermFrequency;

/// Turns raw product text into terms.
///
/// - lowercase
/// - split wherever a character is not alphabetic
/// - drop terms shorter than `min_term_len` (in chars)
/// - drop stop words
#[derive(Debug, Clone)]
pub struct Analyzer {
    stop_words: HashSet<Box<str>, RandomState>,
    min_term_len: usize,
}

impl Analyzer {
    pub fn new(config: &AnalyzerConfig) -> Self {
        let mut stop_words = HashSet::with_hasher(RandomState::new());
        match &config.stop_words {
            StopWords::English => {
                stop_words.extend(ENGLISH_STOP_WORDS.iter().map(|&w| Box::<str>::from(w)));
            }
            StopWords::None => {}
            StopWords::Custom(words) => {
                stop_words.extend(words.iter().map(|w| w.to_lowercase().into_boxed_str()));
            }
        }
        Self {
            stop_words,
            // an empty term is never a term
            min_term_len: config.min_term_len.max(1),
        }
    }

    #[inline]
    pub fn is_stop_word(&self, term: &str) -> bool {
        self.stop_words.contains(term)
    }

    /// Split text into terms, in order of appearance
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        lowered
            .split(|c: char| !c.is_alphabetic())
            .filter(|tok| tok.chars().count() >= self.min_term_len)
            .filter(|tok| !self.is_stop_word(tok))
            .map(str::to_string)
            .collect()
    }

    pub fn analyze(&self, text: &str) -> TermFrequency {
        let mut freq = TermFrequency::new();
        freq.add_terms(&self.tokenize(text));
        freq
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits_on_non_alphabetic() {
        let analyzer = Analyzer::default();
        assert_eq!(
            analyzer.tokenize("Red-Leather  SHOES, size42!"),
            vec!["red", "leather", "shoes", "size"]
        );
    }

    #[test]
    fn drops_english_stop_words() {
        let analyzer = Analyzer::default();
        assert_eq!(
            analyzer.tokenize("The best shoes for the city and the beach"),
            vec!["best", "shoes", "city", "beach"]
        );
    }

    #[test]
    fn only_stop_words_gives_empty_document() {
        let analyzer = Analyzer::default();
        assert!(analyzer.analyze("the and of it").is_empty());
        assert!(analyzer.analyze("").is_empty());
        assert!(analyzer.analyze("  123 -- !! ").is_empty());
    }

    #[test]
    fn stop_words_can_be_disabled_or_replaced() {
        let none = Analyzer::new(&AnalyzerConfig {
            stop_words: StopWords::None,
            ..AnalyzerConfig::default()
        });
        assert_eq!(none.tokenize("the shoe"), vec!["the", "shoe"]);

        let custom = Analyzer::new(&AnalyzerConfig {
            stop_words: StopWords::Custom(vec!["Shoe".to_string()]),
            ..AnalyzerConfig::default()
        });
        assert_eq!(custom.tokenize("the shoe"), vec!["the"]);
    }

    #[test]
    fn min_term_len_filters_short_terms() {
        let analyzer = Analyzer::new(&AnalyzerConfig {
            stop_words: StopWords::None,
            min_term_len: 3,
        });
        assert_eq!(analyzer.tokenize("xl tee by acme"), vec!["tee", "acme"]);
    }

    #[test]
    fn handles_non_ascii_letters() {
        let analyzer = Analyzer::default();
        assert_eq!(analyzer.tokenize("Café crème"), vec!["café", "crème"]);
    }
}
