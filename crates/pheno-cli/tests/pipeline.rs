//! End-to-end tests for the run pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use pheno_cli::config::RunConfig;
use pheno_cli::pipeline::run;
use pheno_model::OutputMode;
use tempfile::TempDir;

fn write(path: &Path, contents: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
    path.to_path_buf()
}

struct Fixture {
    dir: TempDir,
    reference: PathBuf,
    cases: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let reference = write(
            &dir.path().join("all.tsv"),
            "FID\tIID\nF1\tA\nF1\tB\nF2\tA\nF1\tB\n",
        );
        let cases = dir.path().join("cases");
        write(&cases.join("p1.tsv"), "FID\tIID\nF1\tA\n");
        write(&cases.join("p2.csv"), "FID,IID\n\"F2\",'A'\nF9,Z\n");
        Self {
            dir,
            reference,
            cases,
        }
    }

    fn out(&self, name: &str) -> PathBuf {
        self.dir.path().join("out").join(name)
    }
}

#[test]
fn wide_mode_is_default_and_collapses_duplicates() {
    let fx = Fixture::new();
    let config = RunConfig::new(&fx.reference, fx.out("cohort"))
        .with_case_folder(Some(fx.cases.clone()));

    let result = run(&config).unwrap();

    assert_eq!(result.mode, OutputMode::Wide);
    assert_eq!(result.reference_rows, 4);
    assert_eq!(result.distinct_participants, 3);
    assert_eq!(result.outputs.len(), 1);
    let written = fs::read_to_string(fx.out("cohort.tsv")).unwrap();
    assert_eq!(
        written,
        "FID\tIID\tp1\tp2\nF1\tA\t2\t1\nF1\tB\t1\t1\nF2\tA\t1\t2\n"
    );
    let p2 = &result.phenotypes[1];
    assert_eq!(p2.name.as_str(), "p2");
    assert_eq!(p2.listed, 2);
    assert_eq!(p2.unmatched, 1);
    assert_eq!(p2.cases, 1);
    assert_eq!(p2.controls, 2);
}

#[test]
fn per_phenotype_mode_writes_reference_order_files() {
    let fx = Fixture::new();
    let out_dir = fx.out("separate");
    let config = RunConfig::new(&fx.reference, &out_dir)
        .with_case_folder(Some(fx.cases.clone()))
        .with_mode(OutputMode::PerPhenotype);

    let result = run(&config).unwrap();

    assert_eq!(result.outputs.len(), 2);
    assert_eq!(
        fs::read_to_string(out_dir.join("p1")).unwrap(),
        "F1\tA\t2\nF1\tB\t1\nF2\tA\t1\nF1\tB\t1\n"
    );
    assert_eq!(
        fs::read_to_string(out_dir.join("p2")).unwrap(),
        "F1\tA\t1\nF1\tB\t1\nF2\tA\t2\nF1\tB\t1\n"
    );
}

#[test]
fn explicit_files_come_first_in_request_order() {
    let fx = Fixture::new();
    let extra = write(&fx.dir.path().join("zz extra.tsv"), "IID\nA\n");
    let config = RunConfig::new(&fx.reference, fx.out("ordered"))
        .with_case_files(vec![extra, fx.cases.join("p2.csv")])
        .with_case_folder(Some(fx.cases.clone()));

    let result = run(&config).unwrap();

    let names: Vec<&str> = result.phenotypes.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["zz_extra", "p2", "p1"]);
    let header = fs::read_to_string(fx.out("ordered.tsv")).unwrap();
    assert!(header.starts_with("FID\tIID\tzz_extra\tp2\tp1\n"));
}

#[test]
fn spaces_are_kept_when_replacement_disabled() {
    let fx = Fixture::new();
    let spaced = write(&fx.dir.path().join("heart failure.tsv"), "IID\nB\n");
    let config = RunConfig::new(&fx.reference, fx.out("spaced"))
        .with_case_files(vec![spaced])
        .with_replace_spaces(false);

    let result = run(&config).unwrap();

    assert_eq!(result.phenotypes[0].name.as_str(), "heart failure");
}

#[test]
fn broken_case_lists_are_skipped() {
    let fx = Fixture::new();
    write(&fx.cases.join("wide.tsv"), "A\tB\tC\n1\t2\t3\n");
    write(&fx.cases.join("short.csv"), "FID,IID\nF1\n");
    write(&fx.cases.join("empty.tsv"), "FID\tIID\n");
    let missing = fx.dir.path().join("missing.tsv");
    let config = RunConfig::new(&fx.reference, fx.out("partial"))
        .with_case_files(vec![missing.clone()])
        .with_case_folder(Some(fx.cases.clone()));

    let result = run(&config).unwrap();

    let names: Vec<&str> = result.phenotypes.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["p1", "p2"]);
    let skipped: Vec<&Path> = result.skipped.iter().map(|s| s.path.as_path()).collect();
    assert_eq!(skipped.len(), 4);
    assert!(skipped.contains(&missing.as_path()));
    assert!(skipped.contains(&fx.cases.join("wide.tsv").as_path()));
    let reason = |path: &Path| {
        result
            .skipped
            .iter()
            .find(|s| s.path == path)
            .map(|s| s.reason.as_str())
            .unwrap()
    };
    assert!(reason(&missing).starts_with("cannot access: "));
    assert!(reason(&fx.cases.join("wide.tsv")).starts_with("parse error: "));
    assert_eq!(reason(&fx.cases.join("empty.tsv")), "no participants");
}

#[test]
fn duplicate_phenotype_names_keep_first_file() {
    let fx = Fixture::new();
    write(&fx.cases.join("p1.csv"), "FID,IID\nF1,B\n");
    let config = RunConfig::new(&fx.reference, fx.out("dupes"))
        .with_case_folder(Some(fx.cases.clone()));

    let result = run(&config).unwrap();

    assert_eq!(result.phenotypes.len(), 2);
    assert_eq!(result.phenotypes[0].source, fx.cases.join("p1.csv"));
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].path, fx.cases.join("p1.tsv"));
}

#[test]
fn missing_reference_is_fatal_and_writes_nothing() {
    let fx = Fixture::new();
    let config = RunConfig::new(fx.dir.path().join("nope.tsv"), fx.out("never"))
        .with_case_folder(Some(fx.cases.clone()));

    let error = run(&config).unwrap_err();

    assert!(format!("{error:#}").contains("nope.tsv"));
    assert!(!fx.out("never.tsv").exists());
}

#[test]
fn run_fails_when_no_case_list_is_usable() {
    let fx = Fixture::new();
    let bad = write(&fx.dir.path().join("bad.tsv"), "A\tB\tC\n");
    let config = RunConfig::new(&fx.reference, fx.out("none")).with_case_files(vec![bad]);

    let error = run(&config).unwrap_err();

    assert!(error.to_string().contains("no usable case-list files"));
    assert!(!fx.out("none.tsv").exists());
}

#[test]
fn configuration_errors_precede_io() {
    let config = RunConfig::new("/does/not/exist.tsv", "out");
    let error = run(&config).unwrap_err();
    assert!(error.to_string().contains("no case lists given"));
}

#[test]
fn headerless_inputs_are_supported() {
    let dir = TempDir::new().unwrap();
    let reference = write(&dir.path().join("all.txt"), "P01\nP02\nP03\n");
    let cases = write(&dir.path().join("flu.txt"), "'P02'\n");
    let config = RunConfig::new(&reference, dir.path().join("flu"))
        .with_case_files(vec![cases])
        .with_header(false);

    run(&config).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("flu.tsv")).unwrap(),
        "FID\tIID\tflu\nP01\tP01\t1\nP02\tP02\t2\nP03\tP03\t1\n"
    );
}
