//! Run configuration, validated before any file I/O.

use std::path::PathBuf;

use pheno_ingest::DecodeOptions;
use pheno_model::{NameOptions, OutputMode};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no case lists given: pass --input-files and/or --input-folder")]
    NoCaseSource,
    #[error("--make-single and --make-separate are mutually exclusive")]
    ConflictingOutputModes,
    #[error("output prefix must not be empty")]
    EmptyOutputPrefix,
    #[error("reference file path must not be empty")]
    EmptyReferencePath,
}

/// Everything a run needs, passed explicitly to [`crate::pipeline::run`].
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// File listing every participant.
    pub reference: PathBuf,
    /// Case-list files, in request order.
    pub case_files: Vec<PathBuf>,
    /// Folder enumerated (non-recursively) for more case lists.
    pub case_folder: Option<PathBuf>,
    pub decode: DecodeOptions,
    pub naming: NameOptions,
    pub mode: OutputMode,
    /// `<prefix>.tsv` in wide mode, output folder in per-phenotype mode.
    pub output_prefix: PathBuf,
    /// Log unmatched participant IDs at debug level.
    pub log_unmatched: bool,
}

impl RunConfig {
    pub fn new(reference: impl Into<PathBuf>, output_prefix: impl Into<PathBuf>) -> Self {
        Self {
            reference: reference.into(),
            case_files: Vec::new(),
            case_folder: None,
            decode: DecodeOptions::default(),
            naming: NameOptions::default(),
            mode: OutputMode::default(),
            output_prefix: output_prefix.into(),
            log_unmatched: false,
        }
    }

    #[must_use]
    pub fn with_case_files(mut self, files: Vec<PathBuf>) -> Self {
        self.case_files = files;
        self
    }

    #[must_use]
    pub fn with_case_folder(mut self, folder: Option<PathBuf>) -> Self {
        self.case_folder = folder;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.decode.has_header = has_header;
        self
    }

    #[must_use]
    pub fn with_replace_spaces(mut self, replace: bool) -> Self {
        self.naming.replace_spaces = replace;
        self
    }

    #[must_use]
    pub fn with_log_unmatched(mut self, enable: bool) -> Self {
        self.log_unmatched = enable;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reference.as_os_str().is_empty() {
            return Err(ConfigError::EmptyReferencePath);
        }
        if self.case_files.is_empty() && self.case_folder.is_none() {
            return Err(ConfigError::NoCaseSource);
        }
        if self.output_prefix.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputPrefix);
        }
        Ok(())
    }
}

/// Resolves the output-mode flags; neither flag selects the wide table.
pub fn resolve_output_mode(
    make_single: bool,
    make_separate: bool,
) -> Result<OutputMode, ConfigError> {
    match (make_single, make_separate) {
        (true, true) => Err(ConfigError::ConflictingOutputModes),
        (false, true) => Ok(OutputMode::PerPhenotype),
        _ => Ok(OutputMode::Wide),
    }
}
