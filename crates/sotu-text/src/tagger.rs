//! A small rule based Penn Treebank tagger.
//!
//! Closed word classes come from a lexicon; open classes are guessed from
//! shape and suffix. It only has to be good enough for tag frequency counts.

use std::collections::HashMap;

use sotu_core::traits::PosTagger;

const LEXICON: &[(&str, &[&str])] = &[
    ("DT", &["the", "a", "an", "this", "that", "these", "those", "every", "each", "all", "no", "another", "some", "any", "either", "neither"]),
    ("CC", &["and", "or", "but", "nor", "yet", "plus"]),
    ("IN", &[
        "of", "in", "on", "at", "by", "for", "with", "from", "into", "over", "under", "through", "between", "among",
        "against", "during", "before", "after", "about", "above", "below", "since", "until", "upon", "within",
        "without", "because", "although", "though", "while", "whether", "if", "than", "as", "across", "toward",
    ]),
    ("TO", &["to"]),
    ("PRP", &["i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "itself", "ourselves", "themselves"]),
    ("PRP$", &["my", "your", "his", "its", "our", "their"]),
    ("WDT", &["which", "whatever", "whichever"]),
    ("WP", &["who", "whom", "what"]),
    ("WP$", &["whose"]),
    ("WRB", &["when", "where", "why", "how"]),
    ("MD", &["can", "could", "will", "would", "shall", "should", "may", "might", "must"]),
    ("EX", &["there"]),
    ("RB", &["not", "very", "also", "never", "always", "often", "now", "then", "here", "still", "already", "too", "only", "just", "even", "again", "ever"]),
    ("VBZ", &["is", "has", "does"]),
    ("VBP", &["are", "am", "have", "do"]),
    ("VBD", &["was", "were", "had", "did"]),
    ("VB", &["be"]),
    ("VBN", &["been"]),
    ("VBG", &["being"]),
    ("JJR", &["better", "more", "less", "greater", "larger", "fewer"]),
    ("JJS", &["best", "most", "least"]),
    ("UH", &["oh", "yes", "amen"]),
    ("CD", &["one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "hundred", "thousand", "million", "billion", "trillion"]),
];

const SUFFIXES: &[(&str, &str)] = &[
    ("ing", "VBG"),
    ("ed", "VBD"),
    ("ly", "RB"),
    ("est", "JJS"),
    ("ness", "NN"),
    ("ment", "NN"),
    ("tion", "NN"),
    ("sion", "NN"),
    ("ity", "NN"),
    ("ance", "NN"),
    ("ence", "NN"),
    ("ship", "NN"),
    ("ism", "NN"),
    ("ous", "JJ"),
    ("ful", "JJ"),
    ("ive", "JJ"),
    ("able", "JJ"),
    ("ible", "JJ"),
    ("ical", "JJ"),
    ("less", "JJ"),
    ("al", "JJ"),
    ("ic", "JJ"),
    ("ize", "VB"),
    ("ise", "VB"),
    ("ify", "VB"),
];

#[derive(Debug, Clone)]
pub struct RuleTagger {
    lexicon: HashMap<&'static str, &'static str>,
}

impl Default for RuleTagger {
    fn default() -> Self {
        let mut lexicon = HashMap::new();
        for (tag, words) in LEXICON {
            for word in *words {
                lexicon.entry(*word).or_insert(*tag);
            }
        }
        Self { lexicon }
    }
}

impl RuleTagger {
    pub fn new() -> Self { Self::default() }

    fn tag_token(&self, token: &str, sentence_start: bool) -> &'static str {
        if let Some(tag) = punctuation_tag(token) {
            return tag;
        }
        let core = token.trim_matches(|c: char| !c.is_alphanumeric());
        if core.chars().any(|c| c.is_ascii_digit()) {
            return "CD";
        }
        let lower = core.to_lowercase();
        if let Some(tag) = self.lexicon.get(lower.as_str()) {
            return *tag;
        }
        if !sentence_start && core.chars().next().is_some_and(char::is_uppercase) {
            return if lower.ends_with('s') && core.len() > 3 { "NNPS" } else { "NNP" };
        }
        if lower.len() > 4 {
            if let Some((_, tag)) = SUFFIXES.iter().find(|(suffix, _)| lower.ends_with(suffix)) {
                return *tag;
            }
        }
        if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") && !lower.ends_with("us") && !lower.ends_with("is") {
            return "NNS";
        }
        "NN"
    }
}

fn punctuation_tag(token: &str) -> Option<&'static str> {
    if token.chars().any(char::is_alphanumeric) {
        return None;
    }
    Some(match token {
        "," => ",",
        ";" | ":" | "--" | "-" => ":",
        "$" => "$",
        "#" => "#",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "\"" | "``" | "“" => "``",
        "''" | "”" => "''",
        "." | "!" | "?" => ".",
        _ => "SYM",
    })
}

impl PosTagger for RuleTagger {
    fn tag(&self, tokens: &[&str]) -> Vec<(String, String)> {
        tokens
            .iter()
            .enumerate()
            .map(|(idx, token)| (token.to_string(), self.tag_token(token, idx == 0).to_string()))
            .collect()
    }
}
