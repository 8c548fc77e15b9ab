use anyhow::Context;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use sotu_aggregate::{
    ColorBlender, FlowAggregator, FlowOptions, SankeyDiagram, SeriesOptions, TimeSeriesAggregator, TimeSeriesPlot,
    TimeWordCloud, WordCloudFrame,
};
use sotu_core::corpus_loader::{load_corpus, read_affiliations, read_pos_map};
use sotu_core::{CategoryKind, CorpusStore};
use sotu_text::DocumentAnalyzer;

use crate::settings::Settings;

/// Loads every document and extracts its metrics.
pub fn load_store(settings: &Settings) -> anyhow::Result<CorpusStore> {
    let affiliations = read_affiliations(&settings.affiliation_file)
        .with_context(|| format!("reading affiliations from {}", settings.affiliation_file.display()))?;
    let analyzer = DocumentAnalyzer::english(&settings.extra_stopwords);
    let store = load_corpus(&settings.documents_dir, &affiliations, &analyzer)
        .with_context(|| format!("loading documents from {}", settings.documents_dir.display()))?;
    Ok(store)
}

/// Frequency filters on both distributions, then spelled out tag names.
pub fn prepare_store(store: &mut CorpusStore, settings: &Settings, pos_map: &BTreeMap<String, String>) -> anyhow::Result<()> {
    store.frequency_filter(settings.word_count_min, CategoryKind::WordFrequency)?;
    store.frequency_filter(settings.parts_of_speech_min, CategoryKind::PartsOfSpeech)?;
    store.rename_keys(CategoryKind::PartsOfSpeech, pos_map)?;
    tracing::info!(
        word_min = settings.word_count_min,
        pos_min = settings.parts_of_speech_min,
        tags = pos_map.len(),
        "store filtered and renamed"
    );
    Ok(())
}

pub fn load_pos_map(settings: &Settings) -> anyhow::Result<BTreeMap<String, String>> {
    read_pos_map(&settings.pos_map_file)
        .with_context(|| format!("reading tag names from {}", settings.pos_map_file.display()))
}

pub fn word_clouds(store: &CorpusStore, settings: &Settings) -> anyhow::Result<Vec<WordCloudFrame>> {
    let ws = &settings.word_cloud;
    let blender = ColorBlender::from_names(&ws.channels)?;
    let cloud = TimeWordCloud::build(store, ws.period_len, ws.min_year, ws.max_year, &ws.groups, blender)?;
    Ok(cloud.frames())
}

pub fn sankey(store: &CorpusStore, settings: &Settings) -> anyhow::Result<SankeyDiagram> {
    let ss = &settings.sankey;
    let options = FlowOptions { min_total: ss.min_common_words, min_year: ss.min_year, max_year: ss.max_year };
    let rows = FlowAggregator::new(store).rows(&options)?;
    Ok(SankeyDiagram::build(&rows, &ss.label_colors))
}

pub fn time_series(store: &CorpusStore, settings: &Settings) -> anyhow::Result<TimeSeriesPlot> {
    let ts = &settings.time_series;
    let mut options = SeriesOptions::new(ts.category);
    options.split_year = ts.split_year;
    options.split = ts.split;
    options.color_map = ts.color_map.clone();
    Ok(TimeSeriesAggregator::new(store).aggregate(&options)?)
}

pub fn write_json<T: Serialize>(dir: &Path, name: &str, value: &T) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(value)?;
    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote renderer input");
    Ok(path)
}
