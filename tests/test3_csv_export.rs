use chrono::NaiveDate;
use minigolf_scorecard::ScorecardError;
use minigolf_scorecard::export::{
    default_export_file_name, resolve_export_path, to_csv, write_export,
};
use minigolf_scorecard::model::{HOLE_COUNT, ScoreMatrix, players_from_names};
use std::fs;
use std::path::Path;

#[test]
fn test3_row_and_field_counts() {
    for (names, rounds) in [(vec!["W", "A"], 1), (vec!["W", "A", "D"], 4)] {
        let matrix = ScoreMatrix::new(players_from_names(names.clone()), rounds).expect("valid");
        let csv = to_csv(&matrix);
        assert!(csv.ends_with('\n'));

        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows.len(), names.len() * rounds);
        for row in rows {
            assert_eq!(row.split(',').count(), 2 + HOLE_COUNT);
        }
    }
}

#[test]
fn test3_worked_example_row() {
    let mut matrix = ScoreMatrix::new(players_from_names(["W", "A"]), 1).expect("valid");
    matrix.set_cell(0, 0, 0, "3");
    matrix.set_cell(0, 1, 0, "2");

    let csv = to_csv(&matrix);
    let mut rows = csv.lines();
    let expected_w = format!("W,1,3,2{}", ",-".repeat(HOLE_COUNT - 2));
    let expected_a = format!("A,1{}", ",-".repeat(HOLE_COUNT));
    assert_eq!(rows.next(), Some(expected_w.as_str()));
    assert_eq!(rows.next(), Some(expected_a.as_str()));
    assert_eq!(rows.next(), None);
}

#[test]
fn test3_player_major_round_minor() {
    let mut matrix = ScoreMatrix::new(players_from_names(["W", "A"]), 2).expect("valid");
    matrix.set_cell(1, 17, 1, "4");

    let csv = to_csv(&matrix);
    let prefixes: Vec<String> = csv
        .lines()
        .map(|row| row.split(',').take(2).collect::<Vec<_>>().join(","))
        .collect();
    assert_eq!(prefixes, vec!["W,1", "W,2", "A,1", "A,2"]);
    assert!(csv.lines().nth(3).is_some_and(|row| row.ends_with(",4")));
}

#[test]
fn test3_names_are_not_escaped() {
    let matrix = ScoreMatrix::new(players_from_names(["Smith, J", "A"]), 1).expect("valid");
    let csv = to_csv(&matrix);
    let first = csv.lines().next().unwrap_or_default();
    assert!(first.starts_with("Smith, J,1,"));
    assert_eq!(first.split(',').count(), 3 + HOLE_COUNT);
}

#[test]
fn test3_default_file_name_and_paths() {
    let date = NaiveDate::from_ymd_opt(2025, 5, 4).expect("valid date");
    let name = default_export_file_name(date, "csv");
    assert_eq!(name, "MinigolfResultat-2025-05-04.csv");

    let dir = Path::new("/tmp/scores");
    assert_eq!(resolve_export_path(dir, None, &name), dir.join(&name));
    assert_eq!(
        resolve_export_path(dir, Some("mine.csv"), &name),
        dir.join("mine.csv")
    );
    assert_eq!(
        resolve_export_path(dir, Some("/var/out.csv"), &name),
        Path::new("/var/out.csv")
    );
}

#[test]
fn test3_write_export() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("round.csv");
    write_export(&path, "W,1,2\n")?;
    assert_eq!(fs::read_to_string(&path)?, "W,1,2\n");

    let missing = dir.path().join("no-such-dir").join("round.csv");
    let err = write_export(&missing, "x").expect_err("parent directory is missing");
    assert!(matches!(err, ScorecardError::Export(_)));
    Ok(())
}
