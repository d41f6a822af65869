//! CLI error types.

use thiserror::Error;

/// Convenience alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the command-line front end.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file missing
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Report serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record parsed but failed obligor validation
    #[error("invalid obligor in row {row}: {message}")]
    InvalidRecord {
        /// 1-indexed data row in the input file
        row: usize,
        /// Validation failure description
        message: String,
    },

    /// The engine rejected the book
    #[error("aggregation failed: {0}")]
    Engine(#[from] crp_engine::EngineError),

    /// Bad command-line argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
