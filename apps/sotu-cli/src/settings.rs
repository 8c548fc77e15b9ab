//! Typed view of the layered configuration, with the classic run as defaults.

use std::collections::BTreeMap;
use std::path::PathBuf;

use sotu_core::config::Config;
use sotu_core::CategoryKind;

#[derive(Debug, Clone)]
pub struct WordCloudSettings {
    pub period_len: u32,
    pub min_year: i32,
    pub max_year: i32,
    pub groups: Vec<String>,
    /// Group → "red" | "green" | "blue".
    pub channels: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct SankeySettings {
    pub min_common_words: u64,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub label_colors: BTreeMap<String, [u8; 3]>,
}

#[derive(Debug, Clone)]
pub struct TimeSeriesSettings {
    pub category: CategoryKind,
    pub split_year: Option<i32>,
    pub split: bool,
    pub color_map: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub documents_dir: PathBuf,
    pub affiliation_file: PathBuf,
    pub pos_map_file: PathBuf,
    pub output_dir: PathBuf,
    pub word_count_min: u64,
    pub parts_of_speech_min: u64,
    pub extra_stopwords: Vec<String>,
    pub word_cloud: WordCloudSettings,
    pub sankey: SankeySettings,
    pub time_series: TimeSeriesSettings,
}

fn party_names(democrat: &str, republican: &str) -> BTreeMap<String, String> {
    [("Democrat".to_string(), democrat.to_string()), ("Republican".to_string(), republican.to_string())]
        .into_iter()
        .collect()
}

impl Settings {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let party_colors: BTreeMap<String, [u8; 3]> =
            [("Republican".to_string(), [255, 0, 0]), ("Democrat".to_string(), [0, 0, 255])].into_iter().collect();
        let period_len: u32 = config.get_or("word_cloud.period_len", 20)?;
        Ok(Self {
            documents_dir: config.path_or("data.documents_dir", "sotu")?,
            affiliation_file: config.path_or("data.affiliation_file", "president_affiliation.txt")?,
            pos_map_file: config.path_or("data.pos_map_file", "Parts_of_Speech.txt")?,
            output_dir: config.path_or("data.output_dir", "out")?,
            word_count_min: config.get_or("filters.word_count_min", 10)?,
            parts_of_speech_min: config.get_or("filters.parts_of_speech_min", 10)?,
            extra_stopwords: config.get_or("text.extra_stopwords", Vec::new())?,
            word_cloud: WordCloudSettings {
                period_len,
                min_year: config.get_or("word_cloud.min_year", 1939)?,
                max_year: config.get_or("word_cloud.max_year", 2020)?,
                groups: config.get_or("word_cloud.groups", vec!["Republican".to_string(), "Democrat".to_string()])?,
                channels: config.get_or("word_cloud.channels", party_names("blue", "red"))?,
            },
            sankey: SankeySettings {
                min_common_words: config.get_or("sankey.min_common_words", 500)?,
                min_year: config.get_or("sankey.min_year", Some(1936))?,
                max_year: config.get_or("sankey.max_year", None)?,
                label_colors: config.get_or("sankey.label_colors", party_colors)?,
            },
            time_series: TimeSeriesSettings {
                category: config.get_or("time_series.category", CategoryKind::Readability)?,
                split_year: config.get_or("time_series.split_year", Some(1936))?,
                split: config.get_or("time_series.split", true)?,
                color_map: config.get_or("time_series.color_map", party_names("blue", "red"))?,
            },
        })
    }

    /// Applies the `time-series` subcommand flags. Clearing the split year
    /// yields one series per group.
    pub fn apply_time_series_args(&mut self, category: Option<CategoryKind>, no_split_year: bool) {
        if let Some(category) = category {
            self.time_series.category = category;
        }
        if no_split_year {
            self.time_series.split_year = None;
        }
    }
}
