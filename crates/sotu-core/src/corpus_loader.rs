//! Ingestion: metadata tables, document discovery and corpus population.

use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::store::CorpusStore;
use crate::traits::MetricExtractor;
use crate::types::Document;

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid year pattern"));

/// Reads the year → group table. The first line is a header; the year is the
/// first tab separated column and the group the last one.
pub fn read_affiliations(path: &Path) -> Result<BTreeMap<i32, String>> {
    let content = fs::read_to_string(path)?;
    parse_affiliations(&content, &path.display().to_string())
}

pub fn parse_affiliations(content: &str, source_name: &str) -> Result<BTreeMap<i32, String>> {
    let mut affiliations = BTreeMap::new();
    for (idx, line) in content.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() { continue; }
        let columns: Vec<&str> = line.split('\t').collect();
        let year = columns[0].trim().parse::<i32>().map_err(|e| Error::Parse {
            source_name: source_name.to_string(),
            line: idx + 1,
            message: format!("bad year '{}': {e}", columns[0]),
        })?;
        let group = columns[columns.len() - 1].trim();
        affiliations.insert(year, group.to_string());
    }
    Ok(affiliations)
}

/// Reads the tag abbreviation → full name table (columns 2 and 3).
pub fn read_pos_map(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = fs::read_to_string(path)?;
    parse_pos_map(&content, &path.display().to_string())
}

pub fn parse_pos_map(content: &str, source_name: &str) -> Result<BTreeMap<String, String>> {
    let mut mapping = BTreeMap::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() { continue; }
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() < 3 {
            return Err(Error::Parse {
                source_name: source_name.to_string(),
                line: idx + 1,
                message: format!("expected 3 tab separated columns, found {}", columns.len()),
            });
        }
        mapping.insert(columns[1].trim().to_string(), columns[2].trim().to_string());
    }
    Ok(mapping)
}

/// All `.txt` files under `root`, sorted.
pub fn list_documents(root: &Path) -> Vec<PathBuf> {
    let mut txt_files = Vec::new();
    for entry in walkdir::WalkDir::new(root).into_iter().filter_map(|e| e.ok()).filter(|e| e.file_type().is_file()) {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("txt") { txt_files.push(path.to_path_buf()); }
    }
    txt_files.sort();
    txt_files
}

/// Builds a [`Document`] from a file named like `Truman_1947.txt`.
pub fn document_from_path(path: &Path, affiliations: &BTreeMap<i32, String>) -> Result<Document> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .ok_or_else(|| Error::InvalidInput(format!("no file name in {}", path.display())))?;
    let year = YEAR_RE
        .find(&stem)
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .ok_or_else(|| Error::InvalidInput(format!("no year in file name {}", path.display())))?;
    let group = affiliations
        .get(&year)
        .cloned()
        .ok_or_else(|| Error::NotFound(format!("affiliation for year {year} ({})", path.display())))?;
    let text = read_file_content(path)?;
    Ok(Document { title: stem.replace('_', " "), year, group, text })
}

fn read_file_content(file_path: &Path) -> Result<String> {
    match fs::read_to_string(file_path) {
        Ok(content) => Ok(content),
        Err(_) => Ok(String::from_utf8_lossy(&fs::read(file_path)?).to_string()),
    }
}

/// Runs `extractor` over every document and stores the results.
pub fn load_documents<E>(documents: &[Document], extractor: &E) -> Result<CorpusStore>
where
    E: MetricExtractor + ?Sized,
{
    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map_err(|e| Error::Operation(e.to_string()))?
            .progress_chars("#>-"),
    );
    let mut store = CorpusStore::new();
    for doc in documents {
        pb.set_message(doc.title.clone());
        let bundle = extractor.extract(&doc.text, doc.year)?;
        store.insert(&doc.group, &doc.title, bundle)?;
        pb.inc(1);
    }
    pb.finish_and_clear();
    tracing::info!(documents = store.len(), groups = store.groups().count(), "corpus loaded");
    Ok(store)
}

/// Discovers, reads and extracts every document under `data_dir`.
pub fn load_corpus<E>(data_dir: &Path, affiliations: &BTreeMap<i32, String>, extractor: &E) -> Result<CorpusStore>
where
    E: MetricExtractor + ?Sized,
{
    let files = list_documents(data_dir);
    if files.is_empty() {
        tracing::warn!(dir = %data_dir.display(), "no .txt files found");
    }
    let documents = files
        .iter()
        .map(|path| document_from_path(path, affiliations))
        .collect::<Result<Vec<_>>>()?;
    load_documents(&documents, extractor)
}
