use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;

use crate::error::ScorecardError;
use crate::export::{default_export_file_name, resolve_export_path};
use crate::model::{Cursor, GridShape, Player};
use crate::mvu::{ExportFormat, Msg, Notice, Phase, SessionModel, dispatch};
use crate::view::{results_text, scorecard_text};

mod commands;
mod parse;

pub use parse::{ReplAction, ReplParseError, parse_line};

/// What one line of input produced: text for the terminal, and whether to stop.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReplOutcome {
    pub output: String,
    pub quit: bool,
}

impl ReplOutcome {
    fn say(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }
}

/// Terminal front end over a [`SessionModel`].
pub struct ReplSession {
    pub model: SessionModel,
    export_dir: PathBuf,
    today: NaiveDate,
}

impl ReplSession {
    /// # Errors
    ///
    /// Will return `Err` if there are no players or no rounds
    pub fn new(
        players: Vec<Player>,
        round_count: usize,
        export_dir: PathBuf,
        today: NaiveDate,
    ) -> Result<Self, ScorecardError> {
        Ok(Self {
            model: SessionModel::new(players, round_count)?,
            export_dir,
            today,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        let cursor = self.model.cursor;
        let name = self
            .model
            .matrix
            .players()
            .get(cursor.player)
            .map_or("?", |p| p.name.as_str());
        format!("{name} h{} r{}> ", cursor.hole + 1, cursor.round + 1)
    }

    /// Parses and applies one line of input.
    pub fn handle_line(&mut self, line: &str) -> ReplOutcome {
        match parse_line(line) {
            Ok(action) => self.apply(action),
            Err(ReplParseError::Empty) => ReplOutcome::default(),
            Err(ReplParseError::UnknownCommand(token)) => ReplOutcome::say(format!(
                "Unknown command: {token}\n{}",
                commands::build_repl_help()
            )),
            Err(ReplParseError::Usage(usage)) => ReplOutcome::say(format!("Usage: {usage}")),
        }
    }

    pub fn apply(&mut self, action: ReplAction) -> ReplOutcome {
        let shape = self.model.shape();
        match action {
            ReplAction::Score(text) => {
                let Cursor {
                    player,
                    hole,
                    round,
                } = self.model.cursor;
                self.send(Msg::CellEdited {
                    player,
                    hole,
                    round,
                    text,
                })
            }
            ReplAction::Set {
                player,
                hole,
                round,
                value,
            } => {
                let Some(target) = one_based_cell(shape, player, hole, round) else {
                    return ReplOutcome::say(out_of_range(shape));
                };
                self.send(Msg::CellEdited {
                    player: target.player,
                    hole: target.hole,
                    round: target.round,
                    text: value,
                })
            }
            ReplAction::Next => self.send(Msg::NextField),
            ReplAction::Previous => self.send(Msg::PreviousField),
            ReplAction::Goto {
                player,
                hole,
                round,
            } => {
                let Some(target) = one_based_cell(shape, player, hole, round) else {
                    return ReplOutcome::say(out_of_range(shape));
                };
                self.send(Msg::FocusCell(target))
            }
            ReplAction::Player(player) => {
                let Some(index) = player.checked_sub(1).filter(|&i| i < shape.players) else {
                    return ReplOutcome::say(out_of_range(shape));
                };
                let mut outcome = self.send(Msg::TabSelected(index));
                outcome.output = self.card_text();
                outcome
            }
            ReplAction::Card => ReplOutcome::say(self.card_text()),
            ReplAction::Results => {
                let mut outcome = self.send(Msg::Finish);
                outcome.output = results_text(&self.model.summary());
                outcome
            }
            ReplAction::Export(file) => self.export(file.as_deref(), ExportFormat::Csv),
            ReplAction::Html(file) => self.export(file.as_deref(), ExportFormat::Html),
            ReplAction::Json => match serde_json::to_string_pretty(&self.model.summary()) {
                Ok(json) => ReplOutcome::say(json),
                Err(e) => ReplOutcome::say(format!("Could not build summary: {e}")),
            },
            ReplAction::Help => ReplOutcome::say(commands::build_repl_help()),
            ReplAction::Quit => ReplOutcome {
                output: String::new(),
                quit: true,
            },
        }
    }

    fn card_text(&self) -> String {
        let cursor = self.model.cursor;
        scorecard_text(&self.model.matrix, cursor.player, &cursor)
    }

    fn export(&mut self, file: Option<&str>, format: ExportFormat) -> ReplOutcome {
        let default_name = default_export_file_name(self.today, format.extension());
        let path = resolve_export_path(&self.export_dir, file, &default_name);
        self.send(Msg::ExportRequested { path, format })
    }

    /// Dispatches `msg` and turns any pending notice into output, dismissing it.
    fn send(&mut self, msg: Msg) -> ReplOutcome {
        // failures are already recorded on the model as a notice
        let _ = dispatch(&mut self.model, msg);
        let output = match self.model.notice.take() {
            Some(Notice::Saved(path)) => format!("Resultat sparat: {}", path.display()),
            Some(Notice::Failed(reason)) => {
                format!("Det gick inte att spara filen: {reason}")
            }
            None => String::new(),
        };
        ReplOutcome::say(output)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.model.phase == Phase::Results
    }
}

/// Converts 1-based coordinates to a cursor, `None` if any is 0 or past the grid.
fn one_based_cell(shape: GridShape, player: usize, hole: usize, round: usize) -> Option<Cursor> {
    let target = Cursor::new(
        player.checked_sub(1)?,
        hole.checked_sub(1)?,
        round.checked_sub(1)?,
    );
    target.is_within(shape).then_some(target)
}

fn out_of_range(shape: GridShape) -> String {
    format!(
        "Out of range: {} players, {} holes, {} rounds.",
        shape.players, shape.holes, shape.rounds
    )
}

/// Runs the interactive score entry loop until the user quits or input ends.
///
/// # Errors
///
/// Returns an error if the session cannot be created or the terminal fails.
pub fn run_scorecard_repl(
    players: Vec<Player>,
    round_count: usize,
    export_dir: PathBuf,
) -> Result<()> {
    let mut session = ReplSession::new(
        players,
        round_count,
        export_dir,
        Local::now().date_naive(),
    )
    .context("start session")?;
    let mut rl = DefaultEditor::new().context("init repl")?;

    println!("Minigolf Scorecard. Type `help` for commands, Ctrl-D to quit.");
    println!("{}", session.card_text());
    loop {
        match rl.readline(&session.prompt()) {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                rl.add_history_entry(input)?;
                let outcome = session.handle_line(input);
                if !outcome.output.is_empty() {
                    println!("{}", outcome.output);
                }
                if outcome.quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("read repl input"),
        }
    }
    tracing::info!(finished = session.is_finished(), "session ended");
    Ok(())
}
