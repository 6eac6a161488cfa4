use serde::{Deserialize, Serialize};

/// How phenotype labels are laid out on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputMode {
    /// One headerless `FID IID CODE` file per phenotype, reference order.
    PerPhenotype,
    /// One wide table with a column per phenotype, distinct participants.
    #[default]
    Wide,
}

impl OutputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PerPhenotype => "per-phenotype",
            Self::Wide => "wide",
        }
    }
}
