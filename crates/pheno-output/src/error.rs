//! Output error types.

use std::path::PathBuf;

use pheno_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// File I/O error.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Temp file could not be moved over the target.
    #[error("failed to move {temp_path} to {target_path}: {source}")]
    AtomicRename {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Matrix rows are inconsistent with the phenotype header.
    #[error("refusing to write {path}: {source}")]
    Inconsistent {
        path: PathBuf,
        #[source]
        source: CoreError,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
