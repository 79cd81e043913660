//! Error types for the income-gini library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum GiniError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Empty population: at least one individual is required")]
    EmptyPopulation,

    #[error("Invalid income {value} at position {index}: incomes must be non-negative")]
    InvalidIncome { index: usize, value: i64 },

    #[error("Division undefined: total income is zero")]
    DivisionUndefined,

    #[error("Invalid income value '{value}' at line {line}")]
    InvalidValue { line: usize, value: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, GiniError>;
