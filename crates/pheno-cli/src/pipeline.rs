//! Run orchestration: discover, decode, match, write.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{debug, error, info, info_span, warn};

use pheno_core::{CaseList, MatchStats, PhenotypeBatch, assemble_matrix, assemble_single};
use pheno_ingest::{DecodeOptions, check_input_file, decode_participants, list_case_files};
use pheno_model::{NameOptions, OutputMode, Participant, PhenotypeName};
use pheno_output::{WrittenFile, matrix_output_path, write_matrix_file, write_phenotype_files};

use crate::config::RunConfig;
use crate::logging::redact_value;
use crate::types::{PhenotypeSummary, RunResult, SkippedFile};

/// Runs the whole pipeline for one configuration.
///
/// The reference file is fatal; individual case lists that cannot be read,
/// parsed or named are logged, recorded in [`RunResult::skipped`] and left out.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    config.validate()?;
    let run_span = info_span!("run", mode = config.mode.as_str());
    let _run_guard = run_span.enter();
    let started = Instant::now();

    // Stage 1: inputs
    check_input_file(&config.reference)
        .with_context(|| format!("reference file {}", config.reference.display()))?;
    info!(path = %config.reference.display(), "found all participants' file");

    let mut skipped = Vec::new();
    let case_paths = info_span!("discover").in_scope(|| collect_case_paths(config, &mut skipped))?;

    // Stage 2: decode
    let reference = info_span!("decode_reference").in_scope(|| {
        decode_participants(&config.reference, config.decode)
            .with_context(|| format!("parse {}", config.reference.display()))
    })?;
    if reference.is_empty() {
        warn!(path = %config.reference.display(), "reference file contains no participants");
    }
    info!(
        path = %config.reference.display(),
        records = reference.len(),
        layout = reference.content_type.as_str(),
        "parsed reference"
    );

    let batch = info_span!("decode_cases").in_scope(|| {
        build_batch(&case_paths, config.decode, config.naming, &mut skipped)
    });
    if batch.is_empty() {
        bail!("no usable case-list files ({} skipped)", skipped.len());
    }
    if config.log_unmatched {
        log_unmatched(&reference.participants, &batch);
    }

    // Stage 3: assemble and write
    let write_span = info_span!("write", prefix = %config.output_prefix.display());
    let (phenotypes, outputs, distinct_participants) = write_span.in_scope(|| {
        write_outputs(config.mode, &config.output_prefix, &reference.participants, &batch)
    })?;

    info!(
        phenotypes = phenotypes.len(),
        outputs = outputs.len(),
        skipped = skipped.len(),
        duration_ms = started.elapsed().as_millis(),
        "done"
    );

    Ok(RunResult {
        reference: config.reference.clone(),
        reference_rows: reference.len(),
        distinct_participants,
        mode: config.mode,
        phenotypes,
        outputs,
        skipped,
    })
}

/// Explicit case files first (request order), then folder files by name.
///
/// Unreadable explicit files are skipped; an unreadable folder is fatal.
fn collect_case_paths(config: &RunConfig, skipped: &mut Vec<SkippedFile>) -> Result<Vec<PathBuf>> {
    let mut seen = BTreeSet::new();
    let mut paths = Vec::new();

    for path in &config.case_files {
        if let Err(err) = check_input_file(path) {
            error!(path = %path.display(), error = %err, "cannot access case-list file");
            skipped.push(SkippedFile {
                path: path.clone(),
                reason: format!("cannot access: {err}"),
            });
            continue;
        }
        if seen.insert(path.clone()) {
            info!(path = %path.display(), "found case-list file");
            paths.push(path.clone());
        }
    }

    if let Some(folder) = &config.case_folder {
        let listed = list_case_files(folder)
            .with_context(|| format!("read case-list folder {}", folder.display()))?;
        for path in listed {
            if seen.insert(path.clone()) {
                info!(path = %path.display(), "found case-list file");
                paths.push(path);
            }
        }
    }

    Ok(paths)
}

fn build_batch(
    paths: &[PathBuf],
    decode: DecodeOptions,
    naming: NameOptions,
    skipped: &mut Vec<SkippedFile>,
) -> PhenotypeBatch {
    let mut batch = PhenotypeBatch::new();
    for path in paths {
        match load_case_list(path, decode, naming) {
            Ok(list) => {
                let name = list.name.clone();
                if let Err(err) = batch.push(list) {
                    error!(path = %path.display(), phenotype = %name, "{err}; file skipped");
                    skipped.push(SkippedFile {
                        path: path.clone(),
                        reason: err.to_string(),
                    });
                }
            }
            Err(reason) => {
                skipped.push(SkippedFile {
                    path: path.clone(),
                    reason,
                });
            }
        }
    }
    batch
}

fn load_case_list(
    path: &Path,
    decode: DecodeOptions,
    naming: NameOptions,
) -> std::result::Result<CaseList, String> {
    let table = decode_participants(path, decode).map_err(|err| {
        if err.is_access_error() {
            error!(path = %path.display(), error = %err, "cannot access case-list file");
            format!("cannot access: {err}")
        } else {
            error!(path = %path.display(), error = %err, "failed to parse case-list file");
            format!("parse error: {err}")
        }
    })?;
    if table.is_empty() {
        warn!(path = %path.display(), "case-list file has no participants");
        return Err("no participants".to_string());
    }
    let name = PhenotypeName::from_path(path, naming).map_err(|err| {
        error!(path = %path.display(), error = %err, "cannot derive phenotype name");
        err.to_string()
    })?;
    debug!(
        path = %path.display(),
        phenotype = %name,
        records = table.len(),
        layout = table.content_type.as_str(),
        "parsed case list"
    );
    Ok(CaseList {
        name,
        source: path.to_path_buf(),
        participants: table.participants,
    })
}

fn log_unmatched(reference: &[Participant], batch: &PhenotypeBatch) {
    let known: HashSet<&Participant> = reference.iter().collect();
    for list in batch {
        for participant in list.participants.iter().filter(|p| !known.contains(p)) {
            let id = participant.to_string();
            debug!(
                phenotype = %list.name,
                participant = redact_value(&id),
                "case-list participant not in reference"
            );
        }
    }
}

type Written = (Vec<PhenotypeSummary>, Vec<WrittenFile>, usize);

fn write_outputs(
    mode: OutputMode,
    prefix: &Path,
    reference: &[Participant],
    batch: &PhenotypeBatch,
) -> Result<Written> {
    match mode {
        OutputMode::PerPhenotype => {
            info!(dir = %prefix.display(), "exporting one file per phenotype");
            let columns = assemble_single(reference, batch);
            let outputs = write_phenotype_files(prefix, &columns)?;
            let summaries = batch
                .iter()
                .zip(&columns)
                .map(|(list, column)| summarize(list, &column.stats))
                .collect();
            let distinct = reference.iter().collect::<HashSet<_>>().len();
            Ok((summaries, outputs, distinct))
        }
        OutputMode::Wide => {
            let path = matrix_output_path(prefix);
            info!(path = %path.display(), "exporting all phenotypes to a single file");
            let matrix = assemble_matrix(reference, batch);
            let written = write_matrix_file(&path, &matrix)?;
            let summaries = batch
                .iter()
                .zip(&matrix.stats)
                .map(|(list, stats)| summarize(list, stats))
                .collect();
            Ok((summaries, vec![written], matrix.rows.len()))
        }
    }
}

fn summarize(list: &CaseList, stats: &MatchStats) -> PhenotypeSummary {
    PhenotypeSummary {
        name: list.name.clone(),
        source: list.source.clone(),
        listed: stats.listed,
        matched: stats.matched,
        unmatched: stats.unmatched(),
        cases: stats.cases,
        controls: stats.controls(),
    }
}
