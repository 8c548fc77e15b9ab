//! Domain types shared by the extractor, the store and the aggregators.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub type GroupLabel = String;
pub type Title = String;

/// Mapping from a discrete key (word or tag) to a non-negative count.
pub type Distribution = BTreeMap<String, u64>;

/// A single source document as handed over by ingestion.
///
/// - `title`: human readable title derived from the file name
/// - `year`: year the document was delivered
/// - `group`: categorical label (e.g. party affiliation)
/// - `text`: the raw text, lines preserved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub title: Title,
    pub year: i32,
    pub group: GroupLabel,
    pub text: String,
}

/// Everything extracted from one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResultBundle {
    pub word_frequency: Distribution,
    pub word_count: u64,
    pub readability: f64,
    pub parts_of_speech: Distribution,
    pub year: i32,
}

/// The fixed set of per-document categories kept by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CategoryKind {
    #[serde(rename = "word count")]
    WordFrequency,
    #[serde(rename = "num words")]
    WordTotal,
    #[serde(rename = "readability difficulty")]
    Readability,
    #[serde(rename = "parts of speech")]
    PartsOfSpeech,
    #[serde(rename = "year")]
    Year,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 5] = [
        CategoryKind::WordFrequency,
        CategoryKind::WordTotal,
        CategoryKind::Readability,
        CategoryKind::PartsOfSpeech,
        CategoryKind::Year,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CategoryKind::WordFrequency => "word count",
            CategoryKind::WordTotal => "num words",
            CategoryKind::Readability => "readability difficulty",
            CategoryKind::PartsOfSpeech => "parts of speech",
            CategoryKind::Year => "year",
        }
    }

    /// Whether values of this category are distributions rather than scalars.
    pub fn is_distribution(self) -> bool {
        matches!(self, CategoryKind::WordFrequency | CategoryKind::PartsOfSpeech)
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CategoryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        CategoryKind::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| Error::InvalidInput(format!("unknown category '{s}'")))
    }
}

/// A stored value for one (group, category, title) cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum CategoryValue {
    Distribution(Distribution),
    Count(u64),
    Score(f64),
    Year(i32),
}

impl CategoryValue {
    pub fn as_distribution(&self) -> Option<&Distribution> {
        match self {
            CategoryValue::Distribution(d) => Some(d),
            _ => None,
        }
    }

    /// Numeric view of scalar values; `None` for distributions.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CategoryValue::Distribution(_) => None,
            CategoryValue::Count(n) => Some(*n as f64),
            CategoryValue::Score(s) => Some(*s),
            CategoryValue::Year(y) => Some(f64::from(*y)),
        }
    }
}

impl ResultBundle {
    /// Splits the bundle into one value per category.
    pub fn into_categories(self) -> [(CategoryKind, CategoryValue); 5] {
        [
            (CategoryKind::WordFrequency, CategoryValue::Distribution(self.word_frequency)),
            (CategoryKind::WordTotal, CategoryValue::Count(self.word_count)),
            (CategoryKind::Readability, CategoryValue::Score(self.readability)),
            (CategoryKind::PartsOfSpeech, CategoryValue::Distribution(self.parts_of_speech)),
            (CategoryKind::Year, CategoryValue::Year(self.year)),
        ]
    }
}
