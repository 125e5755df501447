use serde::Serialize;

use super::aggregators::{
    ScoreTally, delta_series, holes_counted, relative_to_par, round_total, score_tally,
    session_average,
};
use crate::model::{PAR_PER_HOLE, ScoreMatrix};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RoundSummary {
    /// 1-based, as shown to players.
    pub round: usize,
    pub total: u32,
    pub holes_counted: usize,
    pub relative: i64,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PlayerSummary {
    pub name: String,
    pub rounds: Vec<RoundSummary>,
    pub average: f64,
    pub tally: ScoreTally,
    pub delta: Vec<f64>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GameSummary {
    pub round_count: usize,
    pub hole_count: usize,
    pub players: Vec<PlayerSummary>,
}

impl GameSummary {
    #[must_use]
    pub fn from_matrix(matrix: &ScoreMatrix) -> Self {
        let players = matrix
            .players()
            .iter()
            .enumerate()
            .map(|(idx, player)| summarize_player(matrix, idx, &player.name))
            .collect();

        Self {
            round_count: matrix.round_count(),
            hole_count: matrix.hole_count(),
            players,
        }
    }

    #[must_use]
    pub fn player(&self, name: &str) -> Option<&PlayerSummary> {
        self.players.iter().find(|p| p.name == name)
    }
}

fn summarize_player(matrix: &ScoreMatrix, player: usize, name: &str) -> PlayerSummary {
    let rounds = (0..matrix.round_count())
        .map(|round| {
            let total = round_total(matrix, player, round);
            let holes = holes_counted(matrix, player, round);
            RoundSummary {
                round: round + 1,
                total,
                holes_counted: holes,
                relative: relative_to_par(total, holes, PAR_PER_HOLE),
            }
        })
        .collect();

    PlayerSummary {
        name: name.to_string(),
        rounds,
        average: session_average(matrix, player),
        tally: score_tally(matrix, player),
        delta: delta_series(matrix, player),
    }
}
