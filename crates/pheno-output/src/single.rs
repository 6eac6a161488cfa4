//! One headerless `FID IID CODE` file per phenotype.

use std::io::Write;
use std::path::{Path, PathBuf};

use pheno_core::PhenotypeColumn;
use pheno_model::PhenotypeName;

use crate::WrittenFile;
use crate::atomic::write_atomic;
use crate::error::Result;

/// Destination of a phenotype's file inside the output directory.
pub fn phenotype_output_path(dir: &Path, name: &PhenotypeName) -> PathBuf {
    dir.join(name.as_str())
}

/// Writes one phenotype column under `dir`, named after the phenotype.
pub fn write_phenotype_file(dir: &Path, column: &PhenotypeColumn<'_>) -> Result<WrittenFile> {
    let path = phenotype_output_path(dir, &column.name);
    write_atomic(&path, |writer| {
        for row in column.rows() {
            writeln!(
                writer,
                "{}\t{}\t{}",
                row.participant.fid(),
                row.participant.iid(),
                row.code.as_str()
            )?;
        }
        Ok(())
    })?;

    tracing::info!(
        phenotype = %column.name,
        path = %path.display(),
        rows = column.len(),
        "wrote phenotype file"
    );
    Ok(WrittenFile {
        path,
        rows: column.len(),
    })
}

/// Writes every column, stopping at the first failure.
pub fn write_phenotype_files(
    dir: &Path,
    columns: &[PhenotypeColumn<'_>],
) -> Result<Vec<WrittenFile>> {
    columns
        .iter()
        .map(|column| write_phenotype_file(dir, column))
        .collect()
}
