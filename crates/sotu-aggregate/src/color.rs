use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

use sotu_core::{Error, Result};

use crate::buckets::BucketFrequencies;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "red" => Ok(Channel::Red),
            "green" => Ok(Channel::Green),
            "blue" => Ok(Channel::Blue),
            other => Err(Error::InvalidInput(format!("unknown color channel '{other}'"))),
        }
    }
}

/// Float RGB triple, channels in `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };

    pub fn from_u8(rgb: [u8; 3]) -> Self {
        Self { r: f64::from(rgb[0]), g: f64::from(rgb[1]), b: f64::from(rgb[2]) }
    }

    pub fn css(&self) -> String { format!("rgb({}, {}, {})", self.r, self.g, self.b) }
}

/// Colors a word by how much of its use in a bucket comes from each group.
#[derive(Debug, Clone)]
pub struct ColorBlender {
    channels: BTreeMap<String, Channel>,
}

impl ColorBlender {
    pub fn new(channels: BTreeMap<String, Channel>) -> Self { Self { channels } }

    /// Builds from group → channel name, e.g. `{"Democrat": "blue"}`.
    pub fn from_names(names: &BTreeMap<String, String>) -> Result<Self> {
        let channels = names
            .iter()
            .map(|(group, name)| Ok((group.clone(), name.parse::<Channel>()?)))
            .collect::<Result<_>>()?;
        Ok(Self { channels })
    }

    /// Each mapped group adds `round(share * 255)` to its channel.
    pub fn word_color(&self, word: &str, bucket: &BucketFrequencies) -> [u8; 3] {
        let mut rgb = [0.0_f64; 3];
        let total = bucket.total.get(word).copied().unwrap_or(0);
        let Some(by_group) = bucket.split.get(word) else { return [0, 0, 0] };
        if total == 0 {
            return [0, 0, 0];
        }
        for (group, channel) in &self.channels {
            if let Some(&count) = by_group.get(group) {
                rgb[channel.index()] += (count as f64 / total as f64 * 255.0).round();
            }
        }
        rgb.map(|c| c.clamp(0.0, 255.0) as u8)
    }
}

/// Frequency weighted mix of group colors; groups without a color add nothing.
pub fn blend_rgb(frequencies: &BTreeMap<String, u64>, colors: &BTreeMap<String, [u8; 3]>) -> Rgb {
    let total: u64 = frequencies.values().sum();
    if total == 0 {
        return Rgb::BLACK;
    }
    let mut out = Rgb::BLACK;
    for (label, &count) in frequencies {
        if let Some(&color) = colors.get(label) {
            let share = count as f64 / total as f64;
            let color = Rgb::from_u8(color);
            out.r += share * color.r;
            out.g += share * color.g;
            out.b += share * color.b;
        }
    }
    out
}
