#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ptb() -> Command {
    cargo_bin_cmd!("pontoboard")
}

/// Create a unique output directory inside the system temp dir, empty
pub fn temp_out_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pontoboard_out", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp out dir");
    path.to_string_lossy().to_string()
}

/// Write a small attendance CSV fixture and return its path.
///
/// Three rows: Ana clocks in but is late, Bruno has no clock-ins at all,
/// Carla has banked hours plus 50% overtime.
pub fn write_sample_csv(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_faltas.csv", name));
    let data = "\
MATRÍCULA,NOME,LOCALIZAÇÃO,DIA,BATIDAS,ENTRADA 1,SAÍDA 1,ENTRADA 2,SAÍDA 2,ENTRADA 3,SAÍDA 3,ENTRADA 4,SAÍDA 4,ATRASO,FALTA,BANCO DE HORAS,HORA EXTRA 50% (N.A.),HORA EXTRA 100% (N.A.),DSR DESCONTADO,ADICIONAL NOTURNO,EXPEDIENTE
123,Ana,Matriz,2025-09-01,4,08:00,12:00,13:00,17:00,,,,,00:15,,,,,,,
456,Bruno,Filial,2025-09-01,,,,,,,,,,,,,,,,,
789,Carla,Matriz,2025-09-02,2,08:00,12:00,,,,,,,,,00:45,01:30,,,,
";
    fs::write(&path, data).expect("write fixture csv");
    path.to_string_lossy().to_string()
}

/// First file in `dir` whose name starts with `prefix`.
pub fn find_artifact(dir: &str, prefix: &str) -> Option<PathBuf> {
    fs::read_dir(dir)
        .ok()?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .find(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(prefix))
        })
}

/// Number of entries in `dir`.
pub fn dir_entries(dir: &str) -> usize {
    fs::read_dir(dir).map(|rd| rd.count()).unwrap_or(0)
}
