//! CLI library components for the binary phenotype generator.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
