use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::color::{blend_rgb, Rgb};
use crate::flow::FlowRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub source: usize,
    pub target: usize,
    pub value: u64,
}

/// Node and link tables for a Sankey renderer.
///
/// Nodes are the sorted union of titles and words; links point from a title's
/// code to a word's code and carry the title frequency.
#[derive(Debug, Clone, Serialize)]
pub struct SankeyDiagram {
    pub labels: Vec<String>,
    pub colors: Vec<String>,
    pub links: Vec<Link>,
}

impl SankeyDiagram {
    pub fn build(rows: &[FlowRow], label_colors: &BTreeMap<String, [u8; 3]>) -> Self {
        let labels: Vec<String> = rows
            .iter()
            .flat_map(|r| [r.title.clone(), r.word.clone()])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let codes: HashMap<&str, usize> = labels.iter().enumerate().map(|(i, l)| (l.as_str(), i)).collect();

        let links = rows
            .iter()
            .map(|r| Link { source: codes[r.title.as_str()], target: codes[r.word.as_str()], value: r.title_frequency })
            .collect();

        let mut title_label: HashMap<&str, &str> = HashMap::new();
        let mut word_labels: HashMap<&str, BTreeMap<String, u64>> = HashMap::new();
        for r in rows {
            title_label.entry(r.title.as_str()).or_insert(r.label.as_str());
            *word_labels.entry(r.word.as_str()).or_default().entry(r.label.clone()).or_insert(0) += r.frequency;
        }

        let colors = labels
            .iter()
            .map(|node| {
                // a node that is both a title and a word is colored as a title
                if let Some(label) = title_label.get(node.as_str()) {
                    label_colors.get(*label).map_or(Rgb::BLACK, |c| Rgb::from_u8(*c)).css()
                } else if let Some(freqs) = word_labels.get(node.as_str()) {
                    blend_rgb(freqs, label_colors).css()
                } else {
                    Rgb::BLACK.css()
                }
            })
            .collect();

        Self { labels, colors, links }
    }
}
