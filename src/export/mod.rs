use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScorecardError;
use crate::model::ScoreMatrix;

const EXPORT_FILE_STEM: &str = "MinigolfResultat";
const UNSET_MARKER: &str = "-";

/// Renders one row per player and round, player-major:
/// `name,round,hole1,...,hole18`, unset holes as `-`, each row ending in `\n`.
///
/// Fields are not quoted, so a name containing a comma shifts the columns of its rows.
#[must_use]
pub fn to_csv(matrix: &ScoreMatrix) -> String {
    let mut csv = String::new();

    for (player_idx, player) in matrix.players().iter().enumerate() {
        for round in 0..matrix.round_count() {
            let mut fields = Vec::with_capacity(2 + matrix.hole_count());
            fields.push(player.name.clone());
            fields.push((round + 1).to_string());
            for hole in 0..matrix.hole_count() {
                fields.push(
                    matrix
                        .cell(player_idx, hole, round)
                        .map_or_else(|| UNSET_MARKER.to_string(), |v| v.to_string()),
                );
            }
            csv.push_str(&fields.join(","));
            csv.push('\n');
        }
    }

    csv
}

#[must_use]
pub fn default_export_file_name(date: NaiveDate, extension: &str) -> String {
    format!("{EXPORT_FILE_STEM}-{}.{extension}", date.format("%Y-%m-%d"))
}

/// Resolves where an export goes: an explicit file wins, relative ones land in `dir`.
#[must_use]
pub fn resolve_export_path(dir: &Path, file: Option<&str>, default_name: &str) -> PathBuf {
    match file {
        Some(name) => {
            let path = PathBuf::from(name);
            if path.is_absolute() {
                path
            } else {
                dir.join(path)
            }
        }
        None => dir.join(default_name),
    }
}

/// # Errors
///
/// Will return `Err` if the file cannot be written
pub fn write_export(path: &Path, contents: &str) -> Result<(), ScorecardError> {
    fs::write(path, contents)
        .map_err(|e| ScorecardError::Export(format!("{}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "export written");
    Ok(())
}
