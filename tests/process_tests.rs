mod common;
use common::{dir_entries, find_artifact, ptb, temp_out_dir, write_sample_csv};
use predicates::prelude::*;
use std::fs;
use std::path::Path;

#[test]
fn test_process_writes_both_artifacts() {
    let input = write_sample_csv("process_writes_both");
    let out = temp_out_dir("process_writes_both");

    ptb()
        .args([
            "--out",
            &out,
            "process",
            &input,
            "--format",
            "csv",
            "--date",
            "2025-09-10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("SEM BATIDA"));

    let board = find_artifact(&out, "Trello_Formatado").expect("board artifact");
    let updated = find_artifact(&out, "Faltas_Atualizadas").expect("updated artifact");

    let board_content = fs::read_to_string(board).expect("read board csv");
    assert!(board_content.contains("list,Card Name,desc,checklist,Data"));
    assert!(board_content.contains("ATRASO"));
    assert!(board_content.contains("Sem registros de batida"));
    assert!(board_content.contains("HORA EXTRA 50%"));
    assert!(board_content.contains("2025-09-10"));

    let updated_content = fs::read_to_string(updated).expect("read updated csv");
    assert!(updated_content.contains("ID VERIFICACAO"));
    assert_eq!(updated_content.matches("PROCESSADO").count(), 3);
}

#[test]
fn test_reprocessing_updated_artifact_yields_no_cards() {
    let input = write_sample_csv("reprocess_idempotent");
    let out1 = temp_out_dir("reprocess_idempotent_1");

    ptb()
        .args(["--out", &out1, "process", &input, "--format", "csv"])
        .assert()
        .success();

    let updated = find_artifact(&out1, "Faltas_Atualizadas").expect("updated artifact");

    // feed artifact 2 back in: every row is already stamped
    let out2 = temp_out_dir("reprocess_idempotent_2");
    ptb()
        .args([
            "--out",
            &out2,
            "process",
            updated.to_str().unwrap(),
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cards        : 0"))
        .stdout(predicate::str::contains("already processed"));

    let board2 = find_artifact(&out2, "Trello_Formatado").expect("board artifact");
    let board2_content = fs::read_to_string(board2).expect("read board csv");
    // header only, no data rows
    assert_eq!(board2_content.lines().count(), 1);
}

#[test]
fn test_dry_run_writes_nothing() {
    let input = write_sample_csv("dry_run");
    let out = temp_out_dir("dry_run");

    ptb()
        .args(["--out", &out, "process", &input, "--format", "csv", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert_eq!(dir_entries(&out), 0);
}

#[test]
fn test_unparsable_workbook_fails_hard() {
    let mut path = std::env::temp_dir();
    path.push("pontoboard_garbage.xlsx");
    fs::write(&path, "this is not a spreadsheet").expect("write garbage");
    let out = temp_out_dir("unparsable");

    ptb()
        .args(["--out", &out, "process", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    // no partial output
    assert_eq!(dir_entries(&out), 0);
}

#[test]
fn test_unsupported_extension_fails() {
    let mut path = std::env::temp_dir();
    path.push("pontoboard_input.txt");
    fs::write(&path, "MATRÍCULA,NOME\n1,Ana\n").expect("write txt");

    ptb()
        .args(["process", path.to_str().unwrap(), "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported input extension"));
}

#[test]
fn test_invalid_date_fails() {
    let input = write_sample_csv("invalid_date");

    ptb()
        .args(["process", &input, "--dry-run", "--date", "10/09/2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_inspect_reports_counts() {
    let input = write_sample_csv("inspect_counts");

    ptb()
        .args(["inspect", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows      : 3"))
        .stdout(predicate::str::contains("Pending   : 3"))
        .stdout(predicate::str::contains("Processed : 0"))
        .stdout(predicate::str::contains("ID VERIFICACAO"));
}

#[test]
fn test_inspect_after_process_shows_all_processed() {
    let input = write_sample_csv("inspect_after");
    let out = temp_out_dir("inspect_after");

    ptb()
        .args(["--out", &out, "process", &input, "--format", "csv"])
        .assert()
        .success();

    let updated = find_artifact(&out, "Faltas_Atualizadas").expect("updated artifact");

    ptb()
        .args(["inspect", updated.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pending   : 0"))
        .stdout(predicate::str::contains("Processed : 3"));
}

#[test]
fn test_xlsx_artifacts_round_trip() {
    let input = write_sample_csv("xlsx_round_trip");
    let out = temp_out_dir("xlsx_round_trip");

    ptb()
        .args(["--out", &out, "process", &input, "--format", "xlsx"])
        .assert()
        .success();

    let updated = find_artifact(&out, "Faltas_Atualizadas").expect("updated xlsx");
    assert!(updated.extension().is_some_and(|e| e == "xlsx"));

    // read artifact 2 back through the library: all rows stamped, marker last
    let table = pontoboard::import::read_table(Path::new(&updated)).expect("re-read xlsx");
    assert_eq!(table.n_rows(), 3);
    assert_eq!(
        table.columns().last().map(String::as_str),
        Some("ID VERIFICACAO")
    );
    for row in 0..table.n_rows() {
        assert_eq!(table.cell(row, "ID VERIFICACAO").as_trimmed(), "PROCESSADO");
    }

    let board = find_artifact(&out, "Trello_Formatado").expect("board xlsx");
    let cards = pontoboard::import::read_table(Path::new(&board)).expect("re-read board");
    // Ana's lateness, Bruno's missing clock-ins, Carla's two anomalies
    assert_eq!(cards.n_rows(), 4);
}

#[test]
fn test_config_check_reports_ok_on_defaults() {
    let home = temp_out_dir("config_check_home");

    ptb()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration OK"));
}

#[test]
fn test_init_creates_config_file() {
    let home = temp_out_dir("init_home");

    ptb()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file"));

    ptb()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("save_path"));
}
