//! Ordered collection of named case lists.

use std::path::PathBuf;

use pheno_model::{Participant, PhenotypeName};

use crate::error::{CoreError, Result};

/// Positive participants read from one case-list file.
#[derive(Debug, Clone)]
pub struct CaseList {
    pub name: PhenotypeName,
    pub source: PathBuf,
    pub participants: Vec<Participant>,
}

/// Case lists in declaration order, one per phenotype name.
///
/// The declaration order is the phenotype column order of the wide matrix.
#[derive(Debug, Clone, Default)]
pub struct PhenotypeBatch {
    lists: Vec<CaseList>,
}

impl PhenotypeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a case list, rejecting a name already present.
    pub fn push(&mut self, list: CaseList) -> Result<()> {
        if self.lists.iter().any(|existing| existing.name == list.name) {
            return Err(CoreError::DuplicatePhenotype(list.name.to_string()));
        }
        self.lists.push(list);
        Ok(())
    }

    pub fn names(&self) -> Vec<PhenotypeName> {
        self.lists.iter().map(|list| list.name.clone()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CaseList> {
        self.lists.iter()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

impl<'a> IntoIterator for &'a PhenotypeBatch {
    type Item = &'a CaseList;
    type IntoIter = std::slice::Iter<'a, CaseList>;

    fn into_iter(self) -> Self::IntoIter {
        self.lists.iter()
    }
}
