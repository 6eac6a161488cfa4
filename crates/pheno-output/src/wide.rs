//! Wide multi-phenotype table.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use pheno_core::PhenotypeMatrix;

use crate::WrittenFile;
use crate::atomic::write_atomic;
use crate::error::{OutputError, Result};

/// Extension appended to the output prefix for the wide table.
pub const MATRIX_EXTENSION: &str = "tsv";

/// `<prefix>.tsv`, appended rather than replacing any dot in the prefix.
pub fn matrix_output_path(prefix: &Path) -> PathBuf {
    let mut path = OsString::from(prefix.as_os_str());
    path.push(".");
    path.push(MATRIX_EXTENSION);
    PathBuf::from(path)
}

/// Writes `FID IID <phenotypes...>` followed by one line per matrix row.
///
/// Row widths are validated before the file is created.
pub fn write_matrix_file(path: &Path, matrix: &PhenotypeMatrix) -> Result<WrittenFile> {
    matrix
        .validate()
        .map_err(|source| OutputError::Inconsistent {
            path: path.to_path_buf(),
            source,
        })?;

    write_atomic(path, |writer| {
        writer.write_all(b"FID\tIID")?;
        for name in &matrix.names {
            write!(writer, "\t{name}")?;
        }
        writer.write_all(b"\n")?;

        for row in &matrix.rows {
            write!(
                writer,
                "{}\t{}",
                row.participant.fid(),
                row.participant.iid()
            )?;
            for code in row.codes() {
                write!(writer, "\t{}", code.as_str())?;
            }
            writer.write_all(b"\n")?;
        }
        Ok(())
    })?;

    tracing::info!(
        path = %path.display(),
        rows = matrix.rows.len(),
        phenotypes = matrix.names.len(),
        "wrote phenotype matrix"
    );
    Ok(WrittenFile {
        path: path.to_path_buf(),
        rows: matrix.rows.len(),
    })
}
