use thiserror::Error;

/// Errors returned while reading an inventory or building address objects.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read CSV input: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{column}' in CSV header")]
    MissingColumn { column: String },
    #[error("row {row}: unknown subnet mask '{mask}' for host '{hostname}'")]
    UnknownMask {
        row: usize,
        hostname: String,
        mask: String,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
