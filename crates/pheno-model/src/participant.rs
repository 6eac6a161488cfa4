use std::fmt;

use serde::{Deserialize, Serialize};

/// A cohort member keyed by family and individual identifier.
///
/// Equality and hashing are structural over both fields, so two records
/// match only when FID and IID are both identical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Participant {
    fid: String,
    iid: String,
}

impl Participant {
    pub fn new(fid: impl Into<String>, iid: impl Into<String>) -> Self {
        Self {
            fid: fid.into(),
            iid: iid.into(),
        }
    }

    /// Builds a participant from an IID-only table, reusing the IID as FID.
    pub fn from_iid(iid: impl Into<String>) -> Self {
        let iid = iid.into();
        Self {
            fid: iid.clone(),
            iid,
        }
    }

    pub fn fid(&self) -> &str {
        &self.fid
    }

    pub fn iid(&self) -> &str {
        &self.iid
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.fid, self.iid)
    }
}
