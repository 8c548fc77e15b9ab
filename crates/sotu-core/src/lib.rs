//! sotu-core
//!
//! Domain types, configuration, ingestion and the [`store::CorpusStore`] that
//! the extractor fills and the aggregators read.

pub mod config;
pub mod corpus_loader;
pub mod error;
pub mod store;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use store::CorpusStore;
pub use types::{CategoryKind, CategoryValue, Distribution, Document, ResultBundle};
