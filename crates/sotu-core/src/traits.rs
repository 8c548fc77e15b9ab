use crate::error::Result;
use crate::types::ResultBundle;

pub trait StopwordRemover {
    /// Drops stopwords from whitespace separated text and re-joins the rest with single spaces.
    fn remove_stopwords(&self, text: &str) -> String;
}

pub trait PosTagger {
    /// Tags each token with a Penn Treebank part-of-speech abbreviation.
    fn tag(&self, tokens: &[&str]) -> Vec<(String, String)>;
}

pub trait MetricExtractor {
    fn extract(&self, text: &str, year: i32) -> Result<ResultBundle>;
}
