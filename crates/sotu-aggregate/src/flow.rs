//! Title → word edge table for the flow diagram.

use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

use sotu_core::{CategoryKind, CorpusStore, Result};

static NON_LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z]+").expect("valid title pattern"));

/// Strips everything but ASCII letters from a title.
pub fn sanitize_title(title: &str) -> String { NON_LETTERS.replace_all(title, "").into_owned() }

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowRow {
    pub title: String,
    pub word: String,
    pub frequency: u64,
    pub label: String,
    pub year: i32,
    /// Sum of `frequency` over rows sharing (title, word).
    pub title_frequency: u64,
    /// Sum of `frequency` over rows sharing word.
    pub total_frequency: u64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlowOptions {
    /// Words must occur strictly more often than this overall.
    pub min_total: u64,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
}

pub struct FlowAggregator<'a> {
    store: &'a CorpusStore,
}

impl<'a> FlowAggregator<'a> {
    pub fn new(store: &'a CorpusStore) -> Self { Self { store } }

    pub fn rows(&self, options: &FlowOptions) -> Result<Vec<FlowRow>> {
        let mut rows = Vec::new();
        for group in self.store.groups() {
            for title in self.store.titles(group) {
                let year = self.store.year(group, title)?;
                if options.min_year.is_some_and(|min| year < min) || options.max_year.is_some_and(|max| year > max) {
                    continue;
                }
                let clean = sanitize_title(title);
                for (word, &frequency) in self.store.distribution(group, CategoryKind::WordFrequency, title)? {
                    rows.push(FlowRow {
                        title: clean.clone(),
                        word: word.clone(),
                        frequency,
                        label: group.to_string(),
                        year,
                        title_frequency: 0,
                        total_frequency: 0,
                    });
                }
            }
        }

        let mut by_title_word: HashMap<(String, String), u64> = HashMap::new();
        let mut by_word: HashMap<String, u64> = HashMap::new();
        for row in &rows {
            *by_title_word.entry((row.title.clone(), row.word.clone())).or_insert(0) += row.frequency;
            *by_word.entry(row.word.clone()).or_insert(0) += row.frequency;
        }
        for row in &mut rows {
            row.title_frequency = by_title_word[&(row.title.clone(), row.word.clone())];
            row.total_frequency = by_word[&row.word];
        }

        let before = rows.len();
        rows.retain(|row| row.total_frequency > options.min_total);
        tracing::info!(kept = rows.len(), dropped = before - rows.len(), threshold = options.min_total, "flow rows built");
        Ok(rows)
    }
}
