use std::path::PathBuf;

use pheno_model::{OutputMode, PhenotypeName};
use pheno_output::WrittenFile;

#[derive(Debug)]
pub struct RunResult {
    pub reference: PathBuf,
    pub reference_rows: usize,
    pub distinct_participants: usize,
    pub mode: OutputMode,
    pub phenotypes: Vec<PhenotypeSummary>,
    pub outputs: Vec<WrittenFile>,
    pub skipped: Vec<SkippedFile>,
}

#[derive(Debug)]
pub struct PhenotypeSummary {
    pub name: PhenotypeName,
    pub source: PathBuf,
    pub listed: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub cases: usize,
    pub controls: usize,
}

/// A case-list file left out of the run, with the reason.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}
