use thiserror::Error;

use crate::types::CategoryKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Operation failed: {0}")]
    Operation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Title '{title}' of group '{group}' has no '{category}' entry")]
    MissingTitle {
        group: String,
        title: String,
        category: CategoryKind,
    },

    #[error("Category '{0}' does not hold distributions")]
    NotDistribution(CategoryKind),

    #[error("Category '{0}' does not hold scalar values")]
    NotScalar(CategoryKind),

    #[error("Parse error in {source_name} line {line}: {message}")]
    Parse {
        source_name: String,
        line: usize,
        message: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
