//! Error taxonomy for the merge pipeline.
//!
//! Any failure while locating, parsing, or standardizing a source dataset
//! aborts the whole run; a silently skipped dataset would leave later joins
//! without the key coverage they expect.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// No CSV file could be located under a dataset root.
    #[error("no CSV data found under {root:?}")]
    NotFound { root: PathBuf },

    /// A selected file could not be read as tabular data.
    #[error("failed to parse {path:?} as CSV")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The dataset registry produced nothing to merge.
    #[error("no datasets were loaded")]
    EmptyInput,

    /// Two source columns collapsed to the same normalized name.
    #[error("duplicate column '{column}' after name normalization")]
    Schema { column: String },

    /// The destination could not be created or written.
    #[error("I/O error for {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
