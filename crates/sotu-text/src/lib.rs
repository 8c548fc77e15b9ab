//! sotu-text
//!
//! Per-document metric extraction: stopword removal on top of a Tantivy
//! analyzer, word and part-of-speech counts, and the readability score.

pub mod tantivy_utils;
pub mod readability;
pub mod tagger;
pub mod extractor;

pub use extractor::DocumentAnalyzer;
pub use tagger::RuleTagger;
pub use tantivy_utils::TantivyStopwords;
