//! Phenotype naming and case/control coding.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Options controlling how a phenotype name is derived from a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameOptions {
    /// Replace spaces with underscores.
    pub replace_spaces: bool,
}

impl Default for NameOptions {
    fn default() -> Self {
        Self {
            replace_spaces: true,
        }
    }
}

/// Column name for one binary phenotype.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PhenotypeName(String);

impl PhenotypeName {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ModelError::InvalidPhenotypeName(value));
        }
        Ok(Self(value))
    }

    /// Derives the name from a case-list path: base name without its final
    /// extension, spaces optionally replaced by `_`.
    pub fn from_path(path: &Path, options: NameOptions) -> Result<Self> {
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or_else(|| ModelError::InvalidPhenotypeName(path.display().to_string()))?;
        let name = if options.replace_spaces {
            stem.replace(' ', "_")
        } else {
            stem
        };
        if name.trim().is_empty() {
            return Err(ModelError::InvalidPhenotypeName(path.display().to_string()));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhenotypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Numeric phenotype code written to output tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhenotypeCode {
    Control = 1,
    Case = 2,
}

impl PhenotypeCode {
    pub fn from_case(is_case: bool) -> Self {
        if is_case { Self::Case } else { Self::Control }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Control => "1",
            Self::Case => "2",
        }
    }
}
