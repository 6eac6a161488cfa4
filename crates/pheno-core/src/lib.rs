//! Case/control matching and phenotype matrix assembly.
//!
//! The matcher labels each reference participant as case or control for one
//! phenotype. The assemblers turn a reference population plus a batch of case
//! lists into either one column per phenotype (reference order, duplicates
//! kept) or a single matrix over distinct participants.

mod batch;
mod error;
mod matcher;
mod matrix;

pub use batch::{CaseList, PhenotypeBatch};
pub use error::{CoreError, Result};
pub use matcher::{CaseSet, MatchStats, dedupe_reference, match_cases};
pub use matrix::{
    MatrixRow, PhenotypeColumn, PhenotypeMatrix, PhenotypeRow, assemble_matrix, assemble_single,
};
