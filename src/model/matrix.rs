use serde::Serialize;

use crate::error::ScorecardError;
use crate::model::player::Player;

pub const HOLE_COUNT: usize = 18;
pub const PAR_PER_HOLE: u32 = 2;
/// Largest stroke count a cell accepts. Keeps every per-player sum well inside `u32`.
pub const MAX_STROKES: u32 = 99;

/// One recorded stroke count. `None` is "unset", which is not the same as zero.
pub type ScoreCell = Option<u32>;

/// Parses raw cell text the forgiving way: anything that is not an integer in
/// `1..=MAX_STROKES` comes back as unset.
#[must_use]
pub fn parse_cell(raw: &str) -> ScoreCell {
    match raw.trim().parse::<i64>() {
        Ok(value) => u32::try_from(value)
            .ok()
            .filter(|strokes| (1..=MAX_STROKES).contains(strokes)),
        Err(_) => None,
    }
}

/// Player × hole × round grid for a single session. Dimensions never change after
/// construction.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ScoreMatrix {
    players: Vec<Player>,
    round_count: usize,
    // [player][hole][round], flattened
    cells: Vec<ScoreCell>,
}

impl ScoreMatrix {
    /// # Errors
    ///
    /// Will return `Err` if `players` is empty or `round_count` is zero
    pub fn new(players: Vec<Player>, round_count: usize) -> Result<Self, ScorecardError> {
        if players.is_empty() {
            return Err(ScorecardError::InvalidConfiguration(
                "at least one player is required".to_string(),
            ));
        }
        if round_count < 1 {
            return Err(ScorecardError::InvalidConfiguration(
                "round count must be at least 1".to_string(),
            ));
        }
        let cells = vec![None; players.len() * HOLE_COUNT * round_count];
        Ok(Self {
            players,
            round_count,
            cells,
        })
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn hole_count(&self) -> usize {
        HOLE_COUNT
    }

    #[must_use]
    pub fn round_count(&self) -> usize {
        self.round_count
    }

    #[must_use]
    pub fn player_index(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == name)
    }

    fn index(&self, player: usize, hole: usize, round: usize) -> Option<usize> {
        if player < self.players.len() && hole < HOLE_COUNT && round < self.round_count {
            Some((player * HOLE_COUNT + hole) * self.round_count + round)
        } else {
            None
        }
    }

    /// Stores the parsed value of `raw`, or clears the cell when `raw` is not a positive
    /// integer. Coordinates outside the grid are ignored.
    pub fn set_cell(&mut self, player: usize, hole: usize, round: usize, raw: &str) {
        let value = parse_cell(raw);
        match self.index(player, hole, round) {
            Some(idx) => self.cells[idx] = value,
            None => tracing::debug!(player, hole, round, "ignoring edit outside the grid"),
        }
    }

    #[must_use]
    pub fn cell(&self, player: usize, hole: usize, round: usize) -> ScoreCell {
        self.index(player, hole, round).and_then(|idx| self.cells[idx])
    }

    /// Text the entry grid shows for a cell; empty when unset.
    #[must_use]
    pub fn cell_text(&self, player: usize, hole: usize, round: usize) -> String {
        self.cell(player, hole, round)
            .map(|v| v.to_string())
            .unwrap_or_default()
    }

    /// Set cells of one player's round, in hole order.
    pub fn round_cells(&self, player: usize, round: usize) -> impl Iterator<Item = u32> + '_ {
        (0..HOLE_COUNT).filter_map(move |hole| self.cell(player, hole, round))
    }

    /// Every set cell of one player across all holes and rounds.
    pub fn player_cells(&self, player: usize) -> impl Iterator<Item = u32> + '_ {
        (0..HOLE_COUNT)
            .flat_map(move |hole| (0..self.round_count).map(move |round| (hole, round)))
            .filter_map(move |(hole, round)| self.cell(player, hole, round))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}
