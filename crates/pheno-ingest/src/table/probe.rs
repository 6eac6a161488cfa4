//! Column layout detection.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use pheno_model::{ContentType, TableFormat};

use super::fields::{count_columns, strip_line};
use super::open_error;
use crate::error::{IngestError, Result};

/// Outcome of classifying a table by its first physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutProbe {
    /// 1-based line that was inspected. Always the first line of the file.
    pub line: usize,
    pub column_count: usize,
    pub content_type: ContentType,
}

/// Classifies `path` by splitting its literal first line on the format's separator.
///
/// The first line is inspected whether or not it is a header.
pub fn probe_layout(path: &Path, format: TableFormat) -> Result<LayoutProbe> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut reader = BufReader::new(file);

    let mut first = String::new();
    let bytes = reader
        .read_line(&mut first)
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
    if bytes == 0 {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let column_count = count_columns(strip_line(&first), format.separator());
    let content_type = ContentType::from_column_count(column_count).map_err(|_| {
        IngestError::UnexpectedColumnCount {
            path: path.to_path_buf(),
            line: 1,
            found: column_count,
        }
    })?;

    tracing::debug!(
        path = %path.display(),
        column_count,
        content_type = content_type.as_str(),
        "classified table layout"
    );

    Ok(LayoutProbe {
        line: 1,
        column_count,
        content_type,
    })
}
