use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Minigolf scorecard for the terminal", long_about = None)]
pub struct Args {
    /// Player names in playing order. Repeat the flag or separate with commas.
    #[arg(short = 'p', long = "player", value_name = "NAME", value_delimiter = ',')]
    pub players: Vec<String>,
    /// Number of rounds to play (1-4).
    #[arg(short = 'r', long, value_name = "ROUNDS")]
    pub rounds: Option<usize>,
    /// TOML file with `players`, `rounds` and `export_dir`. Flags override it.
    #[arg(short = 'c', long, value_name = "CONFIG_TOML")]
    pub config: Option<PathBuf>,
    /// Where exports without an absolute path are written.
    #[arg(short = 'o', long, value_name = "EXPORT_DIR")]
    pub export_dir: Option<PathBuf>,
    /// Log as JSON lines instead of plain text.
    #[arg(long)]
    pub log_json: bool,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct FileConfig {
    pub players: Option<Vec<String>>,
    pub rounds: Option<usize>,
    pub export_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanArgs {
    pub players: Vec<String>,
    pub rounds: usize,
    pub export_dir: PathBuf,
    pub log_json: bool,
}
