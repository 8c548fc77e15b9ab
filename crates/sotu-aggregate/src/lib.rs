//! sotu-aggregate
//!
//! Aggregations over a [`sotu_core::CorpusStore`] that feed the three
//! renderers: word clouds by period, the title/word flow diagram and the
//! time series of a scalar category.

pub mod buckets;
pub mod color;
pub mod flow;
pub mod sankey;
pub mod timeseries;

pub use buckets::{make_buckets, Bucket, BucketFrequencies, TimeBucketer, TimeWordCloud, WordCloudFrame};
pub use color::{blend_rgb, Channel, ColorBlender, Rgb};
pub use flow::{FlowAggregator, FlowOptions, FlowRow};
pub use sankey::{Link, SankeyDiagram};
pub use timeseries::{Series, SeriesOptions, TimeSeriesAggregator, TimeSeriesPlot};
