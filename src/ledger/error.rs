use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce a ledger. Loading is all-or-nothing: any of these
/// means no record from the source is used.
#[derive(Error, Debug)]
pub(crate) enum LoadError {
    #[error("Failed to open ledger {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to read ledger: {0}")]
    Read(#[from] csv::Error),

    #[error("Ledger is empty")]
    Empty,

    #[error("Ledger has no {0} column")]
    MissingColumn(&'static str),

    #[error("Row {row}: could not parse date '{value}'")]
    InvalidDate { row: usize, value: String },

    #[error("Row {row}: could not parse cost '{value}'")]
    InvalidCost { row: usize, value: String },
}
