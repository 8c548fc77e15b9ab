//! Year → value series of a scalar category, merged or split by group.

use serde::Serialize;
use std::collections::BTreeMap;

use sotu_core::{CategoryKind, CorpusStore, Error, Result};

pub const MERGED_LABEL: &str = "All";
pub const OTHER_LABEL: &str = "Other";
pub const DEFAULT_COLOR: &str = "black";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub color: String,
    /// Sorted by year.
    pub points: Vec<(i32, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPlot {
    pub category: CategoryKind,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone)]
pub struct SeriesOptions {
    pub category: CategoryKind,
    /// Years before this go into one merged series, the rest per group.
    pub split_year: Option<i32>,
    pub split: bool,
    /// Restricts the groups considered; `None` means every group.
    pub groups: Option<Vec<String>>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    /// Group → line color.
    pub color_map: BTreeMap<String, String>,
}

impl SeriesOptions {
    pub fn new(category: CategoryKind) -> Self {
        Self {
            category,
            split_year: None,
            split: true,
            groups: None,
            min_year: None,
            max_year: None,
            color_map: BTreeMap::new(),
        }
    }

    fn color_label(&self, group: &str) -> (String, String) {
        match self.color_map.get(group) {
            Some(color) => (color.clone(), group.to_string()),
            None => (DEFAULT_COLOR.to_string(), OTHER_LABEL.to_string()),
        }
    }
}

pub struct TimeSeriesAggregator<'a> {
    store: &'a CorpusStore,
}

impl<'a> TimeSeriesAggregator<'a> {
    pub fn new(store: &'a CorpusStore) -> Self { Self { store } }

    /// Year → value for one group, joined on title.
    pub fn group_values(&self, group: &str, options: &SeriesOptions) -> Result<BTreeMap<i32, f64>> {
        let category = options.category;
        if category.is_distribution() {
            return Err(Error::NotScalar(category));
        }
        if let Some(by_title) = self.store.category(group, category) {
            for title in by_title.keys() {
                self.store.year(group, title)?;
            }
        }
        let mut values = BTreeMap::new();
        for (title, year) in self.store.years(group) {
            let value = self.store.scalar(group, category, title)?;
            if options.min_year.is_some_and(|min| year < min) || options.max_year.is_some_and(|max| year > max) {
                continue;
            }
            values.insert(year, value);
        }
        Ok(values)
    }

    /// Builds the series. Where groups share a year in a merged series the
    /// group that sorts last wins.
    pub fn aggregate(&self, options: &SeriesOptions) -> Result<TimeSeriesPlot> {
        let groups: Vec<&str> = self
            .store
            .groups()
            .filter(|g| options.groups.as_ref().map_or(true, |wanted| wanted.iter().any(|w| w.as_str() == *g)))
            .collect();
        let mut per_group = Vec::with_capacity(groups.len());
        for group in groups {
            per_group.push((group, self.group_values(group, options)?));
        }

        let series = match (options.split, options.split_year) {
            (false, _) => {
                let merged: BTreeMap<i32, f64> = per_group.into_iter().flat_map(|(_, values)| values).collect();
                vec![merged_series(merged)]
            }
            (true, None) => per_group
                .into_iter()
                .map(|(group, values)| group_series(options, group, values))
                .collect(),
            (true, Some(split_year)) => {
                let mut pre = BTreeMap::new();
                let mut series = Vec::new();
                let mut post_series = Vec::new();
                for (group, values) in per_group {
                    let (before, after): (BTreeMap<i32, f64>, BTreeMap<i32, f64>) =
                        values.into_iter().partition(|(year, _)| *year < split_year);
                    pre.extend(before);
                    post_series.push(group_series(options, group, after));
                }
                series.push(merged_series(pre));
                series.extend(post_series);
                series
            }
        };
        tracing::info!(category = %options.category, series = series.len(), "time series built");
        Ok(TimeSeriesPlot { category: options.category, series })
    }
}

fn merged_series(values: BTreeMap<i32, f64>) -> Series {
    Series { label: MERGED_LABEL.to_string(), color: DEFAULT_COLOR.to_string(), points: values.into_iter().collect() }
}

fn group_series(options: &SeriesOptions, group: &str, values: BTreeMap<i32, f64>) -> Series {
    let (color, label) = options.color_label(group);
    Series { label, color, points: values.into_iter().collect() }
}
