//! Phenotype table assembly for both output layouts.

use pheno_model::{Participant, PhenotypeCode, PhenotypeName};
use tracing::{debug, warn};

use crate::batch::{CaseList, PhenotypeBatch};
use crate::error::{CoreError, Result};
use crate::matcher::{CaseSet, MatchStats, dedupe_reference, match_cases};

/// One phenotype over the full reference population, in reference order.
#[derive(Debug, Clone)]
pub struct PhenotypeColumn<'a> {
    pub name: PhenotypeName,
    pub participants: &'a [Participant],
    pub labels: Vec<bool>,
    pub stats: MatchStats,
}

/// A labelled reference row of a [`PhenotypeColumn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhenotypeRow<'a> {
    pub participant: &'a Participant,
    pub code: PhenotypeCode,
}

impl<'a> PhenotypeColumn<'a> {
    pub fn rows(&self) -> impl Iterator<Item = PhenotypeRow<'a>> + '_ {
        self.participants
            .iter()
            .zip(&self.labels)
            .map(|(participant, &is_case)| PhenotypeRow {
                participant,
                code: PhenotypeCode::from_case(is_case),
            })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A distinct participant with one case flag per phenotype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRow {
    pub participant: Participant,
    pub cases: Vec<bool>,
}

impl MatrixRow {
    pub fn codes(&self) -> impl Iterator<Item = PhenotypeCode> + '_ {
        self.cases.iter().map(|&is_case| PhenotypeCode::from_case(is_case))
    }
}

/// Wide case/control table over distinct reference participants.
#[derive(Debug, Clone, Default)]
pub struct PhenotypeMatrix {
    /// Column order of the phenotype flags in every row.
    pub names: Vec<PhenotypeName>,
    pub rows: Vec<MatrixRow>,
    /// Per-phenotype statistics, parallel to `names`.
    pub stats: Vec<MatchStats>,
}

impl PhenotypeMatrix {
    /// Checks every row carries exactly one flag per phenotype name.
    pub fn validate(&self) -> Result<()> {
        let expected = self.names.len();
        for (row, entry) in self.rows.iter().enumerate() {
            if entry.cases.len() != expected {
                return Err(CoreError::RowWidthMismatch {
                    row,
                    line: row + 2,
                    expected,
                    found: entry.cases.len(),
                });
            }
        }
        Ok(())
    }
}

/// Builds one column per case list over the reference, duplicates retained.
pub fn assemble_single<'a>(
    reference: &'a [Participant],
    batch: &PhenotypeBatch,
) -> Vec<PhenotypeColumn<'a>> {
    batch
        .iter()
        .map(|list| {
            let cases = CaseSet::new(&list.participants);
            let labels = match_cases(reference, &cases);
            let stats = MatchStats::compute(reference, &cases, &labels);
            report(list, &stats);
            PhenotypeColumn {
                name: list.name.clone(),
                participants: reference,
                labels,
                stats,
            }
        })
        .collect()
}

/// Builds the wide matrix: one row per distinct reference participant in
/// first-seen order, one flag per phenotype in batch order.
pub fn assemble_matrix(reference: &[Participant], batch: &PhenotypeBatch) -> PhenotypeMatrix {
    let distinct = dedupe_reference(reference);
    if distinct.len() != reference.len() {
        debug!(
            reference = reference.len(),
            distinct = distinct.len(),
            "collapsed duplicate reference participants"
        );
    }

    let mut stats = Vec::with_capacity(batch.len());
    let mut columns = Vec::with_capacity(batch.len());
    for list in batch {
        let cases = CaseSet::new(&list.participants);
        let labels = match_cases(&distinct, &cases);
        let list_stats = MatchStats::compute(&distinct, &cases, &labels);
        report(list, &list_stats);
        stats.push(list_stats);
        columns.push(labels);
    }

    let rows = distinct
        .into_iter()
        .enumerate()
        .map(|(index, participant)| MatrixRow {
            participant,
            cases: columns.iter().map(|labels| labels[index]).collect(),
        })
        .collect();

    PhenotypeMatrix {
        names: batch.names(),
        rows,
        stats,
    }
}

fn report(list: &CaseList, stats: &MatchStats) {
    if stats.unmatched() > 0 {
        warn!(
            phenotype = %list.name,
            source = %list.source.display(),
            unmatched = stats.unmatched(),
            "case-list participants not present in reference were ignored"
        );
    }
    debug!(
        phenotype = %list.name,
        cases = stats.cases,
        controls = stats.controls(),
        "matched case list"
    );
}
