//! Set-membership matching against the reference population.

use std::collections::HashSet;

use pheno_model::Participant;

/// Positive participants for one phenotype, keyed by (FID, IID).
#[derive(Debug, Clone, Default)]
pub struct CaseSet {
    members: HashSet<Participant>,
}

impl CaseSet {
    pub fn new(participants: &[Participant]) -> Self {
        participants.iter().cloned().collect()
    }

    pub fn contains(&self, participant: &Participant) -> bool {
        self.members.contains(participant)
    }

    /// Number of distinct participants listed.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl FromIterator<Participant> for CaseSet {
    fn from_iter<I: IntoIterator<Item = Participant>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

/// Labels each reference record, in order, with its membership in `cases`.
pub fn match_cases(reference: &[Participant], cases: &CaseSet) -> Vec<bool> {
    reference.iter().map(|p| cases.contains(p)).collect()
}

/// Removes repeated participants, keeping the first occurrence of each.
pub fn dedupe_reference(reference: &[Participant]) -> Vec<Participant> {
    let mut seen: HashSet<&Participant> = HashSet::with_capacity(reference.len());
    reference
        .iter()
        .filter(|p| seen.insert(*p))
        .cloned()
        .collect()
}

/// Counts describing how one case list matched the reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchStats {
    /// Reference rows labelled.
    pub reference: usize,
    /// Distinct participants in the case list.
    pub listed: usize,
    /// Distinct listed participants found in the reference.
    pub matched: usize,
    /// Reference rows labelled case.
    pub cases: usize,
}

impl MatchStats {
    pub fn compute(reference: &[Participant], cases: &CaseSet, labels: &[bool]) -> Self {
        let distinct: HashSet<&Participant> = reference.iter().collect();
        let matched = cases
            .members
            .iter()
            .filter(|p| distinct.contains(p))
            .count();
        Self {
            reference: labels.len(),
            listed: cases.len(),
            matched,
            cases: labels.iter().filter(|&&is_case| is_case).count(),
        }
    }

    /// Listed participants absent from the reference.
    pub fn unmatched(&self) -> usize {
        self.listed - self.matched
    }

    pub fn controls(&self) -> usize {
        self.reference - self.cases
    }
}
