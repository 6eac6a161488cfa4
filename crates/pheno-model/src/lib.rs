//! Core data model for binary phenotype generation.
//!
//! A cohort is described by [`Participant`] records (FID + IID). Input tables
//! are classified by [`TableFormat`] (delimiter) and [`ContentType`] (column
//! layout). Each case-list file yields a [`PhenotypeName`], and participants
//! are coded per phenotype with [`PhenotypeCode`].

mod error;
mod layout;
mod output;
mod participant;
mod phenotype;

pub use error::{ModelError, Result};
pub use layout::{ContentType, TableFormat};
pub use output::OutputMode;
pub use participant::Participant;
pub use phenotype::{NameOptions, PhenotypeCode, PhenotypeName};
