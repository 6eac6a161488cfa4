//! Table delimiter and column layout classification.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Delimited text format, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableFormat {
    Csv,
    Tsv,
}

impl TableFormat {
    /// `.csv` (any case) is comma-separated; everything else is tab-separated.
    pub fn from_path(path: &Path) -> Self {
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv { Self::Csv } else { Self::Tsv }
    }

    pub fn separator(self) -> char {
        match self {
            Self::Csv => ',',
            Self::Tsv => '\t',
        }
    }
}

/// Column layout of an identifier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    /// One column: IID, with FID copied from it.
    IidOnly,
    /// Two columns: FID then IID.
    FidAndIid,
}

impl ContentType {
    pub fn from_column_count(count: usize) -> Result<Self> {
        match count {
            1 => Ok(Self::IidOnly),
            2 => Ok(Self::FidAndIid),
            other => Err(ModelError::UnexpectedColumnCount(other)),
        }
    }

    pub fn column_count(self) -> usize {
        match self {
            Self::IidOnly => 1,
            Self::FidAndIid => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::IidOnly => "IID only",
            Self::FidAndIid => "FID + IID",
        }
    }
}
