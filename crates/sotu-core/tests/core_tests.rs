use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

use sotu_core::corpus_loader::{document_from_path, list_documents, load_documents, parse_affiliations, parse_pos_map};
use sotu_core::traits::MetricExtractor;
use sotu_core::{CategoryKind, CategoryValue, CorpusStore, Distribution, Document, Error, ResultBundle};

fn dist(pairs: &[(&str, u64)]) -> Distribution {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn bundle(words: &[(&str, u64)], tags: &[(&str, u64)], year: i32) -> ResultBundle {
    let word_frequency = dist(words);
    ResultBundle {
        word_count: word_frequency.values().sum(),
        word_frequency,
        readability: 7.5,
        parts_of_speech: dist(tags),
        year,
    }
}

fn sample_store() -> CorpusStore {
    let mut store = CorpusStore::new();
    store.insert("Democrat", "Truman 1947", bundle(&[("war", 12), ("peace", 10), ("farm", 3)], &[("NN", 20), ("VB", 4)], 1947)).unwrap();
    store.insert("Republican", "Eisenhower 1954", bundle(&[("war", 9), ("defense", 15)], &[("NN", 30), ("JJ", 11)], 1954)).unwrap();
    store
}

#[test]
fn insert_writes_every_category() {
    let store = sample_store();
    assert_eq!(store.len(), 2);
    for category in CategoryKind::ALL {
        assert!(store.value("Democrat", category, "Truman 1947").is_ok(), "missing {category}");
    }
    assert_eq!(store.year("Republican", "Eisenhower 1954").unwrap(), 1954);
    assert_eq!(store.scalar("Democrat", CategoryKind::WordTotal, "Truman 1947").unwrap(), 25.0);
}

#[test]
fn titles_are_listed_per_group() {
    let mut store = sample_store();
    store.insert("Democrat", "Kennedy 1962", bundle(&[("space", 4)], &[], 1962)).unwrap();
    assert_eq!(store.titles("Democrat").collect::<Vec<_>>(), vec!["Kennedy 1962", "Truman 1947"]);
    assert_eq!(store.titles("Whig").count(), 0);
}

#[test]
fn insert_rejects_empty_labels() {
    let mut store = CorpusStore::new();
    assert!(matches!(store.insert("", "t", ResultBundle::default()), Err(Error::InvalidInput(_))));
    assert!(matches!(store.insert("g", "", ResultBundle::default()), Err(Error::InvalidInput(_))));
    assert!(store.is_empty());
}

#[test]
fn frequency_filter_keeps_boundary_and_is_idempotent() {
    let mut store = sample_store();
    store.frequency_filter(10, CategoryKind::WordFrequency).unwrap();
    let once = store.distribution("Democrat", CategoryKind::WordFrequency, "Truman 1947").unwrap().clone();
    assert_eq!(once, dist(&[("war", 12), ("peace", 10)]));
    assert_eq!(
        store.distribution("Republican", CategoryKind::WordFrequency, "Eisenhower 1954").unwrap(),
        &dist(&[("defense", 15)])
    );

    store.frequency_filter(10, CategoryKind::WordFrequency).unwrap();
    assert_eq!(store.distribution("Democrat", CategoryKind::WordFrequency, "Truman 1947").unwrap(), &once);

    // other categories untouched
    assert_eq!(
        store.distribution("Democrat", CategoryKind::PartsOfSpeech, "Truman 1947").unwrap(),
        &dist(&[("NN", 20), ("VB", 4)])
    );
}

#[test]
fn frequency_filter_may_empty_a_document() {
    let mut store = sample_store();
    store.frequency_filter(1_000, CategoryKind::PartsOfSpeech).unwrap();
    assert!(store.distribution("Republican", CategoryKind::PartsOfSpeech, "Eisenhower 1954").unwrap().is_empty());
}

#[test]
fn scalar_categories_cannot_be_filtered_or_renamed() {
    let mut store = sample_store();
    assert!(matches!(store.frequency_filter(1, CategoryKind::Readability), Err(Error::NotDistribution(_))));
    assert!(matches!(store.rename_keys(CategoryKind::Year, &BTreeMap::new()), Err(Error::NotDistribution(_))));
    assert!(matches!(store.scalar("Democrat", CategoryKind::WordFrequency, "Truman 1947"), Err(Error::NotScalar(_))));
}

#[test]
fn rename_keys_drops_unmapped_entries() {
    let mut store = sample_store();
    let mapping: BTreeMap<String, String> = [("NN", "Noun, singular or mass"), ("JJ", "Adjective")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    store.rename_keys(CategoryKind::PartsOfSpeech, &mapping).unwrap();

    assert_eq!(
        store.distribution("Democrat", CategoryKind::PartsOfSpeech, "Truman 1947").unwrap(),
        &dist(&[("Noun, singular or mass", 20)])
    );
    let republican = store.distribution("Republican", CategoryKind::PartsOfSpeech, "Eisenhower 1954").unwrap();
    assert_eq!(republican, &dist(&[("Adjective", 11), ("Noun, singular or mass", 30)]));
    assert!(republican.keys().all(|k| mapping.values().any(|v| v == k)));
}

#[test]
fn rename_collision_keeps_later_source_key() {
    let mut store = CorpusStore::new();
    store.insert("Democrat", "Truman 1947", bundle(&[("war", 1)], &[("NN", 3), ("NNS", 7)], 1947)).unwrap();
    let mapping: BTreeMap<String, String> =
        [("NN", "Noun"), ("NNS", "Noun")].into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    store.rename_keys(CategoryKind::PartsOfSpeech, &mapping).unwrap();

    assert_eq!(store.distribution("Democrat", CategoryKind::PartsOfSpeech, "Truman 1947").unwrap(), &dist(&[("Noun", 7)]));
}

#[test]
fn category_values_keep_their_kind_through_json() {
    let values = [
        CategoryValue::Year(1950),
        CategoryValue::Count(1950),
        CategoryValue::Score(7.5),
        CategoryValue::Distribution(dist(&[("war", 2)])),
    ];
    for value in values {
        let json = serde_json::to_string(&value).unwrap();
        let back: CategoryValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value, "{json}");
    }
    assert_eq!(serde_json::to_string(&CategoryValue::Year(1950)).unwrap(), r#"{"kind":"year","value":1950}"#);
}

#[test]
fn missing_title_is_reported() {
    let store = sample_store();
    let err = store.year("Democrat", "Nixon 1970").unwrap_err();
    assert!(matches!(err, Error::MissingTitle { ref title, .. } if title == "Nixon 1970"));
}

#[test]
fn category_names_round_trip() {
    for category in CategoryKind::ALL {
        assert_eq!(category.name().parse::<CategoryKind>().unwrap(), category);
    }
    assert!("syllables".parse::<CategoryKind>().is_err());
}

#[test]
fn affiliation_table_skips_header_and_uses_last_column() {
    let content = "Year\tPresident\tParty\n1947\tTruman\tDemocrat\n1954\tEisenhower\tRepublican\n\n";
    let table = parse_affiliations(content, "aff.txt").unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table[&1954], "Republican");

    let bad = "Year\tParty\nnineteen\tWhig\n";
    assert!(matches!(parse_affiliations(bad, "aff.txt"), Err(Error::Parse { line: 2, .. })));
}

#[test]
fn pos_table_maps_abbreviation_to_name() {
    let content = "1.\tCC\tCoordinating conjunction\n2.\tCD\tCardinal number\n";
    let table = parse_pos_map(content, "pos.txt").unwrap();
    assert_eq!(table["CD"], "Cardinal number");
    assert!(parse_pos_map("1.\tCC\n", "pos.txt").is_err());
}

#[test]
fn documents_are_discovered_and_named_from_files() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::write(dir.join("Truman_1947.txt"), "Mr. President.\nWe meet.").unwrap();
    fs::write(dir.join("Eisenhower_1954.txt"), "Peace.").unwrap();
    fs::write(dir.join("notes.md"), "ignored").unwrap();

    let files = list_documents(dir);
    assert_eq!(files.len(), 2);

    let affiliations: BTreeMap<i32, String> =
        [(1947, "Democrat".to_string()), (1954, "Republican".to_string())].into_iter().collect();
    let doc = document_from_path(&dir.join("Truman_1947.txt"), &affiliations).unwrap();
    assert_eq!(doc.title, "Truman 1947");
    assert_eq!(doc.year, 1947);
    assert_eq!(doc.group, "Democrat");
    assert!(doc.text.starts_with("Mr. President."));

    fs::write(dir.join("Adams_1799.txt"), "x").unwrap();
    assert!(matches!(document_from_path(&dir.join("Adams_1799.txt"), &affiliations), Err(Error::NotFound(_))));
}

struct CountingExtractor;

impl MetricExtractor for CountingExtractor {
    fn extract(&self, text: &str, year: i32) -> sotu_core::Result<ResultBundle> {
        let mut word_frequency = Distribution::new();
        for word in text.split_whitespace() {
            *word_frequency.entry(word.to_string()).or_insert(0) += 1;
        }
        Ok(ResultBundle { word_count: word_frequency.values().sum(), word_frequency, year, ..Default::default() })
    }
}

#[test]
fn load_documents_populates_store() {
    let docs = vec![
        Document { title: "A".into(), year: 1950, group: "X".into(), text: "cat sat".into() },
        Document { title: "B".into(), year: 1951, group: "Y".into(), text: "cat ran".into() },
    ];
    let store = load_documents(&docs, &CountingExtractor).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.groups().collect::<Vec<_>>(), vec!["X", "Y"]);
    assert_eq!(store.distribution("Y", CategoryKind::WordFrequency, "B").unwrap(), &dist(&[("cat", 1), ("ran", 1)]));
}
