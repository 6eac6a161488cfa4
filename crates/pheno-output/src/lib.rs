//! Output writers for binary phenotype tables.
//!
//! Every file is tab-delimited and written atomically: content goes to a
//! hidden sibling temp file that is renamed over the target only once it is
//! complete, so a failed write never leaves a partial table behind.

mod atomic;
mod error;
mod single;
mod wide;

pub use error::{OutputError, Result};
pub use single::{phenotype_output_path, write_phenotype_file, write_phenotype_files};
pub use wide::{MATRIX_EXTENSION, matrix_output_path, write_matrix_file};

use std::path::PathBuf;

/// A file produced by one of the writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    /// Data lines written, excluding any header.
    pub rows: usize,
}
