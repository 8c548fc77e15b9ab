use sotu_core::traits::{MetricExtractor, PosTagger, StopwordRemover};
use sotu_core::{Distribution, ResultBundle};

use crate::readability::flesch_kincaid;
use crate::tagger::RuleTagger;
use crate::tantivy_utils::TantivyStopwords;

/// Extracts a [`ResultBundle`] from raw document text.
///
/// The word, part-of-speech and readability passes each read the text
/// independently.
pub struct DocumentAnalyzer<S = TantivyStopwords, T = RuleTagger> {
    stopwords: S,
    tagger: T,
}

impl DocumentAnalyzer {
    /// English stopwords plus `extra`, rule based tagger.
    pub fn english(extra_stopwords: &[String]) -> Self {
        Self { stopwords: TantivyStopwords::new(extra_stopwords), tagger: RuleTagger::new() }
    }
}

impl Default for DocumentAnalyzer {
    fn default() -> Self { Self::english(&[]) }
}

impl<S: StopwordRemover, T: PosTagger> DocumentAnalyzer<S, T> {
    pub fn new(stopwords: S, tagger: T) -> Self { Self { stopwords, tagger } }

    /// Lowercased, stopword free, apostrophe free words split on non-letters.
    pub fn word_frequency(&self, text: &str) -> Distribution {
        let mut counts = Distribution::new();
        for line in text.lines() {
            let stripped = self.stopwords.remove_stopwords(&line.trim().to_lowercase()).replace('\'', "");
            for word in stripped.split(|c: char| !c.is_ascii_alphabetic()).filter(|w| !w.is_empty()) {
                *counts.entry(word.to_string()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Tag counts over every `.`-delimited segment.
    pub fn parts_of_speech(&self, text: &str) -> Distribution {
        let mut counts = Distribution::new();
        for sentence in text.split('.') {
            let stripped = self.stopwords.remove_stopwords(sentence);
            let tokens: Vec<&str> = stripped.trim().split(' ').filter(|t| !t.is_empty()).collect();
            if tokens.is_empty() { continue; }
            for (_, tag) in self.tagger.tag(&tokens) {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }
        counts
    }
}

impl<S: StopwordRemover, T: PosTagger> MetricExtractor for DocumentAnalyzer<S, T> {
    fn extract(&self, text: &str, year: i32) -> sotu_core::Result<ResultBundle> {
        let joined = text.lines().collect::<Vec<_>>().join(" ");
        let word_frequency = self.word_frequency(text);
        let bundle = ResultBundle {
            word_count: word_frequency.values().sum(),
            word_frequency,
            readability: flesch_kincaid(&joined),
            parts_of_speech: self.parts_of_speech(&joined),
            year,
        };
        tracing::trace!(year, words = bundle.word_count, readability = bundle.readability, "document extracted");
        Ok(bundle)
    }
}
