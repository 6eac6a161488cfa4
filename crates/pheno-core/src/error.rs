use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("duplicate phenotype name '{0}'")]
    DuplicatePhenotype(String),
    #[error("phenotype columns do not match header at line {line}: expected {expected}, got {found}")]
    RowWidthMismatch {
        /// 0-based data row index.
        row: usize,
        /// 1-based line in the written table (header is line 1).
        line: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
