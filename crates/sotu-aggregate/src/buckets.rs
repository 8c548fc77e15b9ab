//! Year buckets and per-bucket word frequency merging.

use serde::Serialize;
use std::collections::BTreeMap;

use sotu_core::{CategoryKind, CorpusStore, Distribution, Error, Result};

use crate::color::ColorBlender;

/// Word → group → count.
pub type SplitFrequency = BTreeMap<String, BTreeMap<String, u64>>;

/// A closed year interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub start: i32,
    pub end: i32,
}

impl Bucket {
    pub fn name(&self) -> String { format!("{}-{}", self.start, self.end) }

    pub fn contains(&self, year: i32) -> bool { (self.start..=self.end).contains(&year) }
}

/// Partitions `[min_year, max_year]` into buckets of `width` years.
///
/// Bucket starts step from `min_year` while strictly below `max_year`; every
/// bucket ends the year before the next one starts and the last one runs to
/// `max_year`, so it can be up to one year wider than the rest.
pub fn make_buckets(width: u32, min_year: i32, max_year: i32) -> Result<Vec<Bucket>> {
    if width == 0 {
        return Err(Error::InvalidInput("bucket width must be positive".to_string()));
    }
    if min_year > max_year {
        return Err(Error::InvalidInput(format!("min year {min_year} is after max year {max_year}")));
    }
    let step = usize::try_from(width).map_err(|e| Error::InvalidInput(e.to_string()))?;
    let mut starts: Vec<i32> = (min_year..max_year).step_by(step).collect();
    if starts.is_empty() {
        starts.push(min_year);
    }
    let buckets = starts
        .iter()
        .enumerate()
        .map(|(idx, &start)| {
            let end = starts.get(idx + 1).map_or(max_year, |next| next - 1);
            Bucket { start, end }
        })
        .collect();
    Ok(buckets)
}

/// Merged frequencies for one bucket.
#[derive(Debug, Clone, Serialize)]
pub struct BucketFrequencies {
    pub bucket: Bucket,
    /// Summed over the requested groups only.
    pub total: Distribution,
    /// Split by group, over every group in the store.
    pub split: SplitFrequency,
}

impl BucketFrequencies {
    pub fn name(&self) -> String { self.bucket.name() }
}

pub struct TimeBucketer<'a> {
    store: &'a CorpusStore,
}

impl<'a> TimeBucketer<'a> {
    pub fn new(store: &'a CorpusStore) -> Self { Self { store } }

    pub fn bucketize(&self, width: u32, min_year: i32, max_year: i32, groups: &[String]) -> Result<Vec<BucketFrequencies>> {
        let buckets = make_buckets(width, min_year, max_year)?;
        let mut out = Vec::with_capacity(buckets.len());
        for bucket in buckets {
            let total = self.total_frequency(&bucket, groups)?;
            let split = self.split_frequency(&bucket)?;
            tracing::debug!(bucket = %bucket.name(), words = total.len(), "bucket merged");
            out.push(BucketFrequencies { bucket, total, split });
        }
        Ok(out)
    }

    fn total_frequency(&self, bucket: &Bucket, groups: &[String]) -> Result<Distribution> {
        let mut total = Distribution::new();
        for group in groups {
            for (title, year) in self.store.years(group) {
                if !bucket.contains(year) { continue; }
                for (word, count) in self.store.distribution(group, CategoryKind::WordFrequency, title)? {
                    *total.entry(word.clone()).or_insert(0) += count;
                }
            }
        }
        Ok(total)
    }

    fn split_frequency(&self, bucket: &Bucket) -> Result<SplitFrequency> {
        let mut split = SplitFrequency::new();
        for group in self.store.groups() {
            for (title, year) in self.store.years(group) {
                if !bucket.contains(year) { continue; }
                for (word, count) in self.store.distribution(group, CategoryKind::WordFrequency, title)? {
                    *split.entry(word.clone()).or_default().entry(group.to_string()).or_insert(0) += count;
                }
            }
        }
        Ok(split)
    }
}

/// One word cloud subplot: frequencies plus a color per word.
#[derive(Debug, Clone, Serialize)]
pub struct WordCloudFrame {
    pub name: String,
    pub frequencies: Distribution,
    pub colors: BTreeMap<String, [u8; 3]>,
}

/// Everything a word cloud renderer needs for the "words by time period" figure.
#[derive(Debug, Clone)]
pub struct TimeWordCloud {
    pub buckets: Vec<BucketFrequencies>,
    blender: ColorBlender,
}

impl TimeWordCloud {
    pub fn build(
        store: &CorpusStore,
        width: u32,
        min_year: i32,
        max_year: i32,
        groups: &[String],
        blender: ColorBlender,
    ) -> Result<Self> {
        let buckets = TimeBucketer::new(store).bucketize(width, min_year, max_year, groups)?;
        Ok(Self { buckets, blender })
    }

    /// Color callback for (word, bucket name).
    pub fn color(&self, word: &str, bucket: &str) -> Option<[u8; 3]> {
        self.buckets
            .iter()
            .find(|b| b.name() == bucket)
            .map(|b| self.blender.word_color(word, b))
    }

    /// Subplots to draw; buckets without any words are skipped.
    pub fn frames(&self) -> Vec<WordCloudFrame> {
        self.buckets
            .iter()
            .filter(|b| !b.total.is_empty())
            .map(|b| WordCloudFrame {
                name: b.name(),
                frequencies: b.total.clone(),
                colors: b.total.keys().map(|w| (w.clone(), self.blender.word_color(w, b))).collect(),
            })
            .collect()
    }
}
