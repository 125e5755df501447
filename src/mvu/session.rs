use maud::Markup;
use std::path::PathBuf;

use crate::error::ScorecardError;
use crate::export::{to_csv, write_export};
use crate::model::{Cursor, GridShape, Player, ScoreMatrix};
use crate::score::GameSummary;
use crate::view::render_results_page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entry,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Html,
    Json,
}

impl ExportFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        }
    }
}

/// Message shown to the player until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Saved(PathBuf),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct SessionModel {
    pub matrix: ScoreMatrix,
    pub cursor: Cursor,
    pub phase: Phase,
    pub notice: Option<Notice>,
    pub markup: Option<Markup>,
    pub last_export: Option<PathBuf>,
}

impl SessionModel {
    /// # Errors
    ///
    /// Will return `Err` if there are no players or no rounds
    pub fn new(players: Vec<Player>, round_count: usize) -> Result<Self, ScorecardError> {
        let matrix = ScoreMatrix::new(players, round_count)?;
        Ok(Self {
            matrix,
            cursor: Cursor::default(),
            phase: Phase::Entry,
            notice: None,
            markup: None,
            last_export: None,
        })
    }

    #[must_use]
    pub fn shape(&self) -> GridShape {
        GridShape::from(&self.matrix)
    }

    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary::from_matrix(&self.matrix)
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    CellEdited {
        player: usize,
        hole: usize,
        round: usize,
        text: String,
    },
    NextField,
    PreviousField,
    FocusCell(Cursor),
    TabSelected(usize),
    Finish,
    ExportRequested {
        path: PathBuf,
        format: ExportFormat,
    },
    Exported(PathBuf),
    Rendered(Markup),
    DismissNotice,
    Failed(ScorecardError),
}

#[derive(Debug, Clone)]
pub enum Effect {
    AdvanceFocus,
    RenderResults,
    WriteExport { path: PathBuf, format: ExportFormat },
}

pub fn update(model: &mut SessionModel, msg: Msg) -> Vec<Effect> {
    let shape = model.shape();
    match msg {
        Msg::CellEdited {
            player,
            hole,
            round,
            text,
        } => {
            model.matrix.set_cell(player, hole, round, &text);
            model.markup = None;
            // only typing into the focused cell moves focus along
            let at_cursor = model.cursor == Cursor::new(player, hole, round);
            if at_cursor && !text.trim().is_empty() {
                vec![Effect::AdvanceFocus]
            } else {
                vec![]
            }
        }
        Msg::NextField => {
            model.cursor = model.cursor.next_cell(shape);
            vec![]
        }
        Msg::PreviousField => {
            model.cursor = model.cursor.previous_cell(shape);
            vec![]
        }
        Msg::FocusCell(cursor) => {
            if cursor.is_within(shape) {
                model.cursor = cursor;
            }
            vec![]
        }
        Msg::TabSelected(player) => {
            model.cursor = model.cursor.select_player(player, shape);
            vec![]
        }
        Msg::Finish => {
            model.phase = Phase::Results;
            vec![Effect::RenderResults]
        }
        Msg::ExportRequested { path, format } => vec![Effect::WriteExport { path, format }],
        Msg::Exported(path) => {
            model.notice = Some(Notice::Saved(path.clone()));
            model.last_export = Some(path);
            vec![]
        }
        Msg::Rendered(markup) => {
            model.markup = Some(markup);
            vec![]
        }
        Msg::DismissNotice => {
            model.notice = None;
            vec![]
        }
        Msg::Failed(e) => {
            model.notice = Some(Notice::Failed(e.to_string()));
            vec![]
        }
    }
}

pub fn run_effect(effect: Effect, model: &SessionModel) -> Msg {
    match effect {
        Effect::AdvanceFocus => Msg::NextField,
        Effect::RenderResults => Msg::Rendered(render_results_page(&model.summary())),
        Effect::WriteExport { path, format } => {
            let contents = match format {
                ExportFormat::Csv => Ok(to_csv(&model.matrix)),
                ExportFormat::Html => Ok(render_results_page(&model.summary()).into_string()),
                ExportFormat::Json => {
                    serde_json::to_string_pretty(&model.summary()).map_err(ScorecardError::from)
                }
            };
            match contents.and_then(|text| write_export(&path, &text)) {
                Ok(()) => Msg::Exported(path),
                Err(e) => Msg::Failed(e),
            }
        }
    }
}
