//! Participant decoding.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use pheno_model::{ContentType, Participant, TableFormat};

use super::fields::{clean_field, count_columns, strip_line};
use super::open_error;
use super::probe::{LayoutProbe, probe_layout};
use crate::error::{IngestError, Result};

/// Options for [`decode_participants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Discard the first line before parsing records.
    pub has_header: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { has_header: true }
    }
}

/// A fully decoded identifier table.
#[derive(Debug, Clone)]
pub struct DecodedTable {
    pub path: PathBuf,
    pub format: TableFormat,
    pub content_type: ContentType,
    /// Records in file order, duplicates retained.
    pub participants: Vec<Participant>,
}

impl DecodedTable {
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

/// Verifies that `path` exists and is a regular file.
pub fn check_input_file(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;
    if !metadata.is_file() {
        return Err(IngestError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Decodes an identifier table into participants.
///
/// The separator comes from the extension (`.csv` is comma, anything else
/// tab) and the layout from the first line. Blank lines are skipped. Any
/// error fails the whole file.
pub fn decode_participants(path: &Path, options: DecodeOptions) -> Result<DecodedTable> {
    check_input_file(path)?;
    let format = TableFormat::from_path(path);
    let probe = probe_layout(path, format)?;

    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let reader = BufReader::new(file);
    let separator = format.separator();

    let mut participants = Vec::new();
    let mut header_checked = !options.has_header;

    for (index, line_result) in reader.lines().enumerate() {
        let line_number = index + 1;
        let raw = line_result.map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        if options.has_header && line_number == 1 {
            continue;
        }

        let line = strip_line(&raw).trim();
        if line.is_empty() {
            continue;
        }

        if !header_checked {
            check_header_width(path, &probe, line, separator, line_number)?;
            header_checked = true;
        }

        let participant = match probe.content_type {
            ContentType::IidOnly => Participant::from_iid(clean_field(line)),
            ContentType::FidAndIid => parse_fid_and_iid(path, line, separator, line_number)?,
        };
        participants.push(participant);
    }

    tracing::debug!(
        path = %path.display(),
        records = participants.len(),
        content_type = probe.content_type.as_str(),
        "decoded identifier table"
    );

    Ok(DecodedTable {
        path: path.to_path_buf(),
        format,
        content_type: probe.content_type,
        participants,
    })
}

fn check_header_width(
    path: &Path,
    probe: &LayoutProbe,
    line: &str,
    separator: char,
    line_number: usize,
) -> Result<()> {
    let data = count_columns(line, separator);
    if data != probe.column_count {
        return Err(IngestError::HeaderColumnMismatch {
            path: path.to_path_buf(),
            header: probe.column_count,
            data,
            line: line_number,
        });
    }
    Ok(())
}

fn parse_fid_and_iid(
    path: &Path,
    line: &str,
    separator: char,
    line_number: usize,
) -> Result<Participant> {
    let mut fields = line.split(separator);
    match (fields.next(), fields.next()) {
        (Some(fid), Some(iid)) => Ok(Participant::new(clean_field(fid), clean_field(iid))),
        _ => Err(IngestError::TooFewFields {
            path: path.to_path_buf(),
            line: line_number,
            found: count_columns(line, separator),
            content: line.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp(content: &str, suffix: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    const NO_HEADER: DecodeOptions = DecodeOptions { has_header: false };

    #[test]
    fn test_decode_iid_only_quoted() {
        let file = create_temp("'P01'\n\"P02\"\n", ".tsv");
        let table = decode_participants(file.path(), NO_HEADER).unwrap();
        assert_eq!(table.content_type, ContentType::IidOnly);
        assert_eq!(
            table.participants,
            vec![Participant::new("P01", "P01"), Participant::new("P02", "P02")]
        );
    }

    #[test]
    fn test_decode_fid_and_iid_with_header() {
        let file = create_temp("FID,IID\nF1,A\n F1 , \"B\" \nF2,A\n", ".csv");
        let table = decode_participants(file.path(), DecodeOptions::default()).unwrap();
        assert_eq!(table.format, TableFormat::Csv);
        assert_eq!(
            table.participants,
            vec![
                Participant::new("F1", "A"),
                Participant::new("F1", "B"),
                Participant::new("F2", "A"),
            ]
        );
    }

    #[test]
    fn test_decode_skips_blank_lines_and_keeps_duplicates() {
        let file = create_temp("P01\n\n   \nP01\nP02\n", ".txt");
        let table = decode_participants(file.path(), NO_HEADER).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.participants[0], table.participants[1]);
    }

    #[test]
    fn test_decode_header_only_is_empty() {
        let file = create_temp("IID\n", ".tsv");
        let table = decode_participants(file.path(), DecodeOptions::default()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_decode_too_few_fields_reports_line() {
        let file = create_temp("F1\tA\nF2\tB\nF3\n", ".tsv");
        let result = decode_participants(file.path(), NO_HEADER);
        match result {
            Err(IngestError::TooFewFields { line, found, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(found, 1);
            }
            other => panic!("expected TooFewFields, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_extra_fields_use_first_two() {
        let file = create_temp("F1,A\nF2,B,extra\n", ".csv");
        let table = decode_participants(file.path(), NO_HEADER).unwrap();
        assert_eq!(table.participants[1], Participant::new("F2", "B"));
    }

    #[test]
    fn test_decode_header_width_mismatch() {
        let file = create_temp("IID\nF1\tA\n", ".tsv");
        let result = decode_participants(file.path(), DecodeOptions::default());
        assert!(matches!(
            result,
            Err(IngestError::HeaderColumnMismatch {
                header: 1,
                data: 2,
                line: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_decode_crlf_keeps_first_data_row() {
        let file = create_temp("FID,IID\r\nF1,A\r\nF2,B\r\n", ".csv");
        let table = decode_participants(file.path(), DecodeOptions::default()).unwrap();
        assert_eq!(
            table.participants,
            vec![Participant::new("F1", "A"), Participant::new("F2", "B")]
        );
    }

    #[test]
    fn test_decode_crlf_error_names_physical_line() {
        let file = create_temp("F1\tA\r\n\r\nF2\tB\r\nF3\r\n", ".tsv");
        let result = decode_participants(file.path(), NO_HEADER);
        match result {
            Err(IngestError::TooFewFields { line, content, .. }) => {
                assert_eq!(line, 4);
                assert_eq!(content, "F3");
            }
            other => panic!("expected TooFewFields, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_crlf_header_mismatch_line() {
        let file = create_temp("IID\r\n\r\nF1\tA\r\n", ".tsv");
        let result = decode_participants(file.path(), DecodeOptions::default());
        assert!(matches!(
            result,
            Err(IngestError::HeaderColumnMismatch { line: 3, .. })
        ));
    }

    #[test]
    fn test_decode_separator_only_line_is_a_record() {
        let file = create_temp("F1,A\n,\nF2,B\n", ".csv");
        let table = decode_participants(file.path(), NO_HEADER).unwrap();
        assert_eq!(
            table.participants,
            vec![
                Participant::new("F1", "A"),
                Participant::new("", ""),
                Participant::new("F2", "B"),
            ]
        );
    }

    #[test]
    fn test_decode_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = decode_participants(dir.path(), NO_HEADER);
        assert!(matches!(result, Err(IngestError::NotAFile { .. })));
    }
}
