//! In-memory store of per-document results, indexed group → category → title.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::types::{CategoryKind, CategoryValue, Distribution, GroupLabel, ResultBundle, Title};

type CategoryTable = BTreeMap<CategoryKind, BTreeMap<Title, CategoryValue>>;

/// Holds every document's [`ResultBundle`], split by category.
///
/// All categories of a document are written together by [`CorpusStore::insert`],
/// so a (group, title) pair present under one category is present under all of
/// them. [`CorpusStore::frequency_filter`] and [`CorpusStore::rename_keys`] are
/// the only mutators after insertion and each replaces whole distributions.
#[derive(Debug, Clone, Default)]
pub struct CorpusStore {
    data: BTreeMap<GroupLabel, CategoryTable>,
}

impl CorpusStore {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, group: &str, title: &str, bundle: ResultBundle) -> Result<()> {
        if group.is_empty() {
            return Err(Error::InvalidInput(format!("document '{title}' has an empty group label")));
        }
        if title.is_empty() {
            return Err(Error::InvalidInput(format!("document in group '{group}' has an empty title")));
        }
        let table = self.data.entry(group.to_string()).or_default();
        for (category, value) in bundle.into_categories() {
            table.entry(category).or_default().insert(title.to_string(), value);
        }
        Ok(())
    }

    /// Keeps only the entries whose count is at least `threshold`, per document.
    pub fn frequency_filter(&mut self, threshold: u64, category: CategoryKind) -> Result<()> {
        self.replace_distributions(category, |dist| {
            dist.iter()
                .filter(|(_, count)| **count >= threshold)
                .map(|(key, count)| (key.clone(), *count))
                .collect()
        })?;
        tracing::debug!(%category, threshold, "frequency filter applied");
        Ok(())
    }

    /// Rekeys every distribution of `category` through `mapping`.
    ///
    /// Keys missing from `mapping` are dropped, not kept under their old name.
    pub fn rename_keys(&mut self, category: CategoryKind, mapping: &BTreeMap<String, String>) -> Result<()> {
        self.replace_distributions(category, |dist| {
            let mut renamed = Distribution::new();
            for (key, &count) in dist {
                if let Some(new_key) = mapping.get(key) {
                    renamed.insert(new_key.clone(), count);
                }
            }
            renamed
        })?;
        tracing::debug!(%category, mapped_keys = mapping.len(), "keys renamed");
        Ok(())
    }

    fn replace_distributions<F>(&mut self, category: CategoryKind, f: F) -> Result<()>
    where
        F: Fn(&Distribution) -> Distribution,
    {
        if !category.is_distribution() {
            return Err(Error::NotDistribution(category));
        }
        for table in self.data.values_mut() {
            let Some(by_title) = table.get_mut(&category) else { continue };
            for value in by_title.values_mut() {
                if let CategoryValue::Distribution(dist) = value {
                    *dist = f(dist);
                }
            }
        }
        Ok(())
    }

    pub fn groups(&self) -> impl Iterator<Item = &str> { self.data.keys().map(String::as_str) }

    /// Titles of a group in sorted order; empty for an unknown group.
    pub fn titles<'a>(&'a self, group: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.category(group, CategoryKind::Year)
            .into_iter()
            .flat_map(|by_title| by_title.keys().map(String::as_str))
    }

    /// All (title, value) cells of one category in one group.
    pub fn category(&self, group: &str, category: CategoryKind) -> Option<&BTreeMap<Title, CategoryValue>> {
        self.data.get(group).and_then(|table| table.get(&category))
    }

    pub fn value(&self, group: &str, category: CategoryKind, title: &str) -> Result<&CategoryValue> {
        self.category(group, category)
            .and_then(|by_title| by_title.get(title))
            .ok_or_else(|| Error::MissingTitle {
                group: group.to_string(),
                title: title.to_string(),
                category,
            })
    }

    pub fn distribution(&self, group: &str, category: CategoryKind, title: &str) -> Result<&Distribution> {
        if !category.is_distribution() {
            return Err(Error::NotDistribution(category));
        }
        self.value(group, category, title)?
            .as_distribution()
            .ok_or(Error::NotDistribution(category))
    }

    pub fn scalar(&self, group: &str, category: CategoryKind, title: &str) -> Result<f64> {
        if category.is_distribution() {
            return Err(Error::NotScalar(category));
        }
        self.value(group, category, title)?.as_f64().ok_or(Error::NotScalar(category))
    }

    pub fn year(&self, group: &str, title: &str) -> Result<i32> {
        match self.value(group, CategoryKind::Year, title)? {
            CategoryValue::Year(year) => Ok(*year),
            _ => Err(Error::NotScalar(CategoryKind::Year)),
        }
    }

    /// Iterates (title, year) for every document of a group.
    pub fn years<'a>(&'a self, group: &str) -> impl Iterator<Item = (&'a str, i32)> + 'a {
        self.category(group, CategoryKind::Year).into_iter().flat_map(|by_title| {
            by_title.iter().filter_map(|(title, value)| match value {
                CategoryValue::Year(year) => Some((title.as_str(), *year)),
                _ => None,
            })
        })
    }

    /// Number of stored documents across all groups.
    pub fn len(&self) -> usize {
        self.data
            .values()
            .filter_map(|table| table.get(&CategoryKind::Year))
            .map(BTreeMap::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}
