//! Identifier table ingestion.
//!
//! This crate turns participant identifier files into ordered
//! [`Participant`](pheno_model::Participant) sequences.
//!
//! # Features
//!
//! - **Layout Probe**: Classify a table as IID-only or FID + IID from its first line
//! - **Decoding**: Parse records, tolerating quotes and surrounding whitespace
//! - **Case-List Discovery**: Enumerate candidate case-list files in a folder
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pheno_ingest::{DecodeOptions, decode_participants, list_case_files};
//!
//! let reference = decode_participants(Path::new("all.tsv"), DecodeOptions::default())?;
//! for path in list_case_files(Path::new("cases"))? {
//!     let cases = decode_participants(&path, DecodeOptions::default())?;
//! }
//! ```

mod discovery;
mod error;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Table Decoding ===
pub use table::{
    DecodeOptions, DecodedTable, LayoutProbe, check_input_file, clean_field, decode_participants,
    probe_layout,
};

// === File Discovery ===
pub use discovery::list_case_files;
