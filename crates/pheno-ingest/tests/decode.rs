//! Property and fixture tests for identifier table decoding.

use std::fs;
use std::path::PathBuf;

use pheno_ingest::{DecodeOptions, IngestError, decode_participants};
use pheno_model::{ContentType, Participant};
use proptest::prelude::{Just, Strategy, prop, prop_assert_eq, prop_oneof, proptest};
use tempfile::TempDir;

fn write_table(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write table");
    path
}

fn id() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_]{1,8}"
}

proptest! {
    #[test]
    fn two_column_tables_decode_in_order(
        rows in prop::collection::vec((id(), id()), 1..40),
        has_header in prop::bool::ANY,
        extension in prop_oneof![Just("csv"), Just("tsv"), Just("txt")],
        eol in prop_oneof![Just("\n"), Just("\r\n")],
    ) {
        let dir = TempDir::new().unwrap();
        let sep = if extension == "csv" { "," } else { "\t" };
        let mut contents = String::new();
        if has_header {
            contents.push_str(&format!("FID{sep}IID{eol}"));
        }
        for (fid, iid) in &rows {
            contents.push_str(&format!("{fid}{sep}{iid}{eol}"));
        }
        let path = write_table(&dir, &format!("cases.{extension}"), &contents);

        let table = decode_participants(&path, DecodeOptions { has_header }).unwrap();
        prop_assert_eq!(table.content_type, ContentType::FidAndIid);
        let expected: Vec<Participant> = rows
            .iter()
            .map(|(fid, iid)| Participant::new(fid.as_str(), iid.as_str()))
            .collect();
        prop_assert_eq!(table.participants, expected);
    }

    #[test]
    fn one_column_tables_decode_in_order(
        rows in prop::collection::vec(id(), 1..40),
        quoted in prop::bool::ANY,
    ) {
        let dir = TempDir::new().unwrap();
        let mut contents = String::new();
        for iid in &rows {
            if quoted {
                contents.push_str(&format!("\"{iid}\"\n"));
            } else {
                contents.push_str(&format!("{iid}\n"));
            }
        }
        let path = write_table(&dir, "cases.tsv", &contents);

        let table = decode_participants(&path, DecodeOptions { has_header: false }).unwrap();
        prop_assert_eq!(table.content_type, ContentType::IidOnly);
        prop_assert_eq!(table.participants.len(), rows.len());
        for (participant, iid) in table.participants.iter().zip(&rows) {
            prop_assert_eq!(participant.fid(), iid.as_str());
            prop_assert_eq!(participant.iid(), iid.as_str());
        }
    }
}

#[test]
fn single_quoted_iid_decodes_to_pair() {
    let dir = TempDir::new().unwrap();
    let path = write_table(&dir, "cases.tsv", "'P01'\n");
    let table = decode_participants(&path, DecodeOptions { has_header: false }).unwrap();
    assert_eq!(table.participants, vec![Participant::new("P01", "P01")]);
}

#[test]
fn three_column_classification_line_is_structural_error() {
    let dir = TempDir::new().unwrap();
    let path = write_table(&dir, "cases.csv", "FID,IID,AGE\nF1,A,30\n");
    let error = decode_participants(&path, DecodeOptions::default()).unwrap_err();
    assert!(matches!(
        error,
        IngestError::UnexpectedColumnCount { found: 3, .. }
    ));
    assert!(error.to_string().contains("cases.csv"));
}

#[test]
fn names_with_spaces_survive_decoding() {
    let dir = TempDir::new().unwrap();
    let path = write_table(
        &dir,
        "reference.tsv",
        "Family 1\tPerson A\nFamily 1\tPerson B\n\"Family_5\"\t'Person_Z'\n",
    );
    let table = decode_participants(&path, DecodeOptions { has_header: false }).unwrap();
    assert_eq!(
        table.participants,
        vec![
            Participant::new("Family 1", "Person A"),
            Participant::new("Family 1", "Person B"),
            Participant::new("Family_5", "Person_Z"),
        ]
    );
}

#[test]
fn missing_file_is_access_error() {
    let dir = TempDir::new().unwrap();
    let error =
        decode_participants(&dir.path().join("absent.tsv"), DecodeOptions::default()).unwrap_err();
    assert!(error.is_access_error());
}
