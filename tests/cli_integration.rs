//! End-to-end runs over temporary directories

use chestbench::cli::{parse_args, run_command};
use chestbench::store;
use std::path::Path;
use tempfile::TempDir;

fn run(args: &[&str]) -> chestbench::Result<()> {
    let mut full = vec!["chestbench", "--quiet"];
    full.extend_from_slice(args);
    run_command(parse_args(full).unwrap())
}

fn csv_arg(dir: &TempDir) -> String {
    dir.path().join("bench.csv").display().to_string()
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.display().to_string()
}

#[test]
fn test_full_run_writes_all_artifacts() {
    let dir = TempDir::new().unwrap();
    let csv = csv_arg(&dir);
    let json = write_file(
        &dir,
        "entries.json",
        r#"[{"paper": "CheXNet (2017)", "backbone": "DenseNet-121", "AUC": "0.84"}]"#,
    );
    let notes = write_file(
        &dir,
        "notes.txt",
        "Architecture: ResNet-50\nAUC: 0.81\nInput Size: 384×384\n\nArchitecture: ViT-B/16\nAUC: n/a",
    );
    let md = dir.path().join("bench.md");
    let xlsx = dir.path().join("bench.xlsx");

    run(&[
        "--csv",
        &csv,
        "--from-json",
        &json,
        "--from-notes",
        &notes,
        "--md",
        md.to_str().unwrap(),
        "--xlsx",
        xlsx.to_str().unwrap(),
    ])
    .unwrap();

    let records = store::load(&csv).unwrap();
    assert_eq!(records.len(), 3);
    // Descending by AUC, non-numeric last
    assert_eq!(records[0].model, "DenseNet-121");
    assert_eq!(records[1].model, "ResNet-50");
    assert_eq!(records[2].model, "ViT-B/16");
    assert_eq!(records[1].input_resolution, "384x384");

    let md_text = std::fs::read_to_string(&md).unwrap();
    assert!(md_text.starts_with("| Paper & Year |"));
    assert_eq!(md_text.lines().count(), 5);
    assert!(xlsx.exists());
}

#[test]
fn test_no_sources_leaves_store_byte_identical() {
    let dir = TempDir::new().unwrap();
    let csv = csv_arg(&dir);
    let original = "paper_year,model\nA 2020,ResNet-50\n";
    std::fs::write(&csv, original).unwrap();

    run(&["--csv", &csv]).unwrap();
    assert_eq!(std::fs::read_to_string(&csv).unwrap(), original);
}

#[test]
fn test_no_sources_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let csv = csv_arg(&dir);
    run(&["--csv", &csv]).unwrap();
    assert!(!Path::new(&csv).exists());
}

#[test]
fn test_stored_entry_wins_over_new_duplicate() {
    let dir = TempDir::new().unwrap();
    let csv = csv_arg(&dir);

    let stored = vec![chestbench::Record::from_pairs([
        ("paper_year", "CheXNet (2017)"),
        ("model", "DenseNet-121"),
        ("notes", "original notes"),
    ])];
    store::save(&csv, &stored).unwrap();

    let json = write_file(
        &dir,
        "dup.json",
        r#"{"paper_year": "CheXNet (2017)", "model": "DenseNet-121", "notes": "revised notes"}"#,
    );
    run(&["--csv", &csv, "--from-json", &json]).unwrap();

    let records = store::load(&csv).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].notes, "original notes");
}

#[test]
fn test_malformed_json_aborts_without_touching_store() {
    let dir = TempDir::new().unwrap();
    let csv = csv_arg(&dir);
    let original = "paper_year,model\nA 2020,ResNet-50\n";
    std::fs::write(&csv, original).unwrap();

    let bad = write_file(&dir, "bad.json", "{not json");
    let notes = write_file(&dir, "ok.txt", "Model: B\nAUC: 0.9");

    let result = run(&["--csv", &csv, "--from-json", &bad, "--from-notes", &notes]);
    assert!(result.is_err());
    assert_eq!(std::fs::read_to_string(&csv).unwrap(), original);
}

#[test]
fn test_xlsx_failure_is_non_fatal() {
    let dir = TempDir::new().unwrap();
    let csv = csv_arg(&dir);
    let notes = write_file(&dir, "notes.txt", "Model: ResNet-50\nAUC: 0.8");
    let bad_xlsx = dir.path().join("missing_dir").join("bench.xlsx");

    run(&[
        "--csv",
        &csv,
        "--from-notes",
        &notes,
        "--xlsx",
        bad_xlsx.to_str().unwrap(),
    ])
    .unwrap();

    // The CSV still lands even though the workbook could not be written
    assert_eq!(store::load(&csv).unwrap().len(), 1);
    assert!(!bad_xlsx.exists());
}

#[test]
fn test_repeated_runs_accumulate() {
    let dir = TempDir::new().unwrap();
    let csv = csv_arg(&dir);

    let first = write_file(&dir, "a.txt", "Paper: A 2020\nModel: ResNet-50\nAUC: 0.8");
    run(&["--csv", &csv, "--from-notes", &first]).unwrap();

    let second = write_file(&dir, "b.txt", "Paper: B 2021\nModel: DenseNet-121\nAUC: 0.9");
    run(&["--csv", &csv, "--from-notes", &second]).unwrap();

    let records = store::load(&csv).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].paper_year, "B 2021");
    assert_eq!(records[1].paper_year, "A 2020");
}
