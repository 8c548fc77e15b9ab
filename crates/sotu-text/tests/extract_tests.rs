use sotu_core::traits::{MetricExtractor, PosTagger, StopwordRemover};
use sotu_text::readability::flesch_kincaid;
use sotu_text::{DocumentAnalyzer, RuleTagger, TantivyStopwords};

#[test]
fn stopwords_are_removed_case_sensitively() {
    let stopwords = TantivyStopwords::default();
    assert_eq!(stopwords.remove_stopwords("the cat sat on the mat"), "cat sat mat");
    assert_eq!(stopwords.remove_stopwords("The   cat"), "The cat");
    let extra = TantivyStopwords::new(&["cat".to_string()]);
    assert_eq!(extra.remove_stopwords("the cat sat"), "sat");
}

#[test]
fn word_frequency_matches_the_worked_example() {
    let analyzer = DocumentAnalyzer::default();
    let a = analyzer.extract("the cat sat", 1950).unwrap();
    assert_eq!(a.word_frequency.get("cat"), Some(&1));
    assert_eq!(a.word_frequency.get("sat"), Some(&1));
    assert!(!a.word_frequency.contains_key("the"));
    assert_eq!(a.word_count, 2);
    assert_eq!(a.year, 1950);
}

#[test]
fn words_are_lowercased_and_split_on_non_letters() {
    let analyzer = DocumentAnalyzer::default();
    let freq = analyzer.word_frequency("Nation's budget—Nation's DEBT\nbudget 1947 budget");
    assert_eq!(freq.get("nations"), Some(&2));
    assert_eq!(freq.get("budget"), Some(&3));
    assert_eq!(freq.get("debt"), Some(&1));
    assert!(freq.keys().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
}

#[test]
fn parts_of_speech_counts_every_kept_token() {
    let analyzer = DocumentAnalyzer::default();
    let tags = analyzer.parts_of_speech("Congress passed laws quickly. Freedom matters.");
    let total: u64 = tags.values().sum();
    assert_eq!(total, 6);
    assert_eq!(tags.get("VBD"), Some(&1));
    assert_eq!(tags.get("RB"), Some(&1));
}

#[test]
fn tagger_uses_lexicon_shape_and_suffix() {
    let tagger = RuleTagger::new();
    let tagged = tagger.tag(&["We", "can", "build", "1947", "Americans", "happiness", ","]);
    let tags: Vec<&str> = tagged.iter().map(|(_, t)| t.as_str()).collect();
    assert_eq!(tags, vec!["PRP", "MD", "NN", "CD", "NNPS", "NN", ","]);
}

#[test]
fn readability_follows_formula_and_guards_empty_text() {
    assert_eq!(flesch_kincaid(""), 0.0);
    assert_eq!(flesch_kincaid("   "), 0.0);
    // 3 words, 1 segment, 3 vowels
    let expected = 0.39 * 3.0 + 11.8 * (3.0 / 3.0) - 15.59;
    assert!((flesch_kincaid("the cat sat") - expected).abs() < 1e-9);
    // "a. b." splits into 3 segments
    let expected = 0.39 * 2.0 / 3.0 + 11.8 * (1.0 / 2.0) - 15.59;
    assert!((flesch_kincaid("a. b.") - expected).abs() < 1e-9);
}
