use std::ops::RangeInclusive;
use std::path::Path;

use crate::error::ScorecardError;

pub const MIN_PLAYERS: usize = 2;
pub const ROUND_RANGE: RangeInclusive<usize> = 1..=4;

/// Trims names and drops blank ones, keeping the playing order.
#[must_use]
pub fn clean_player_names(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// # Errors
///
/// Will return `Err` if fewer than two players are named
pub fn check_players(names: &[String]) -> Result<(), ScorecardError> {
    if names.len() < MIN_PLAYERS {
        return Err(ScorecardError::InvalidConfiguration(format!(
            "at least {MIN_PLAYERS} players are needed, got {}",
            names.len()
        )));
    }
    Ok(())
}

/// # Errors
///
/// Will return `Err` if the round count is outside 1-4
pub fn check_rounds(rounds: usize) -> Result<(), ScorecardError> {
    if !ROUND_RANGE.contains(&rounds) {
        return Err(ScorecardError::InvalidConfiguration(format!(
            "rounds must be between {} and {}, got {rounds}",
            ROUND_RANGE.start(),
            ROUND_RANGE.end()
        )));
    }
    Ok(())
}

/// # Errors
///
/// Will return `Err` if the path is not an existing directory
pub fn check_export_dir(dir: &Path) -> Result<(), ScorecardError> {
    if !dir.is_dir() {
        return Err(ScorecardError::Config(format!(
            "export directory '{}' does not exist.",
            dir.display()
        )));
    }
    Ok(())
}
