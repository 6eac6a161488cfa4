use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unexpected column count: {0} (expected 1 or 2)")]
    UnexpectedColumnCount(usize),
    #[error("invalid phenotype name derived from '{0}'")]
    InvalidPhenotypeName(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
