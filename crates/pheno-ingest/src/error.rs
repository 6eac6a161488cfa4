//! Error types for identifier table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating or decoding identifier tables.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but is a directory (or other non-file).
    #[error("{path} is a directory, not a file")]
    NotAFile { path: PathBuf },

    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Structural Errors ===
    /// File has no first line to classify.
    #[error("file is empty: {path}")]
    EmptyFile { path: PathBuf },

    /// Classification line has a column count other than 1 or 2.
    #[error("unexpected column count in {path} at line {line}: {found} (expected 1 or 2)")]
    UnexpectedColumnCount {
        path: PathBuf,
        line: usize,
        found: usize,
    },

    /// Header and first data line disagree on column count.
    #[error(
        "header of {path} has {header} column(s) but data line {line} has {data}"
    )]
    HeaderColumnMismatch {
        path: PathBuf,
        header: usize,
        data: usize,
        line: usize,
    },

    /// FID + IID data line with fewer than two fields.
    #[error("failed to parse {path} at line {line}: expected 2 columns, found {found} in '{content}'")]
    TooFewFields {
        path: PathBuf,
        line: usize,
        found: usize,
        content: String,
    },
}

impl IngestError {
    /// True for errors raised before any content was parsed.
    pub fn is_access_error(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. }
                | Self::NotAFile { .. }
                | Self::DirectoryNotFound { .. }
                | Self::DirectoryRead { .. }
        )
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
