use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScorecardError;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs, FileConfig};

const DEFAULT_ROUNDS: usize = 1;

/// # Errors
///
/// Will return `Err` if the config file is unreadable or the merged settings are invalid
pub fn args_checks() -> Result<CleanArgs, ScorecardError> {
    resolve_args(Args::parse())
}

/// # Errors
///
/// Will return `Err` if the file cannot be read or is not valid TOML
pub fn load_file_config(path: &Path) -> Result<FileConfig, ScorecardError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ScorecardError::Config(format!("read {}: {e}", path.display())))?;
    Ok(toml::from_str::<FileConfig>(&contents)?)
}

/// Flags win over the config file, the config file over defaults.
///
/// # Errors
///
/// Will return `Err` if the config file is unreadable or the merged settings are invalid
pub fn resolve_args(args: Args) -> Result<CleanArgs, ScorecardError> {
    let file_config = match args.config.as_ref() {
        Some(path) => load_file_config(path)?,
        None => FileConfig::default(),
    };

    let raw_players = if args.players.is_empty() {
        file_config.players.unwrap_or_default()
    } else {
        args.players
    };
    let players = validation::clean_player_names(&raw_players);
    validation::check_players(&players)?;

    let rounds = args
        .rounds
        .or(file_config.rounds)
        .unwrap_or(DEFAULT_ROUNDS);
    validation::check_rounds(rounds)?;

    let export_dir = args
        .export_dir
        .or(file_config.export_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    validation::check_export_dir(&export_dir)?;

    Ok(CleanArgs {
        players,
        rounds,
        export_dir,
        log_json: args.log_json,
    })
}
