use serde::{Deserialize, Serialize};

use crate::model::matrix::ScoreMatrix;

/// Focused cell in the entry grid. Entry order is round-minor, player-mid, hole-major.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub player: usize,
    pub hole: usize,
    pub round: usize,
}

/// Grid dimensions the cursor walks over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridShape {
    pub players: usize,
    pub holes: usize,
    pub rounds: usize,
}

impl From<&ScoreMatrix> for GridShape {
    fn from(matrix: &ScoreMatrix) -> Self {
        Self {
            players: matrix.player_count(),
            holes: matrix.hole_count(),
            rounds: matrix.round_count(),
        }
    }
}

impl Cursor {
    #[must_use]
    pub fn new(player: usize, hole: usize, round: usize) -> Self {
        Self {
            player,
            hole,
            round,
        }
    }

    #[must_use]
    pub fn is_within(&self, shape: GridShape) -> bool {
        self.player < shape.players && self.hole < shape.holes && self.round < shape.rounds
    }

    /// Next cell in entry order; stays put on the last cell.
    #[must_use]
    pub fn next_cell(self, shape: GridShape) -> Self {
        if self.round + 1 < shape.rounds {
            Self::new(self.player, self.hole, self.round + 1)
        } else if self.player + 1 < shape.players {
            Self::new(self.player + 1, self.hole, 0)
        } else if self.hole + 1 < shape.holes {
            Self::new(0, self.hole + 1, 0)
        } else {
            self
        }
    }

    /// Previous cell in entry order; stays put on the first cell.
    #[must_use]
    pub fn previous_cell(self, shape: GridShape) -> Self {
        if self.round > 0 {
            Self::new(self.player, self.hole, self.round - 1)
        } else if self.player > 0 {
            Self::new(self.player - 1, self.hole, shape.rounds.saturating_sub(1))
        } else if self.hole > 0 {
            Self::new(
                shape.players.saturating_sub(1),
                self.hole - 1,
                shape.rounds.saturating_sub(1),
            )
        } else {
            self
        }
    }

    /// Tab switch: keeps the hole, jumps to the first round of `player`.
    #[must_use]
    pub fn select_player(self, player: usize, shape: GridShape) -> Self {
        if player < shape.players {
            Self::new(player, self.hole, 0)
        } else {
            self
        }
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.player == 0 && self.hole == 0 && self.round == 0
    }

    #[must_use]
    pub fn is_last(&self, shape: GridShape) -> bool {
        self.player + 1 == shape.players
            && self.hole + 1 == shape.holes
            && self.round + 1 == shape.rounds
    }

    /// Zero-based position in entry order.
    #[must_use]
    pub fn ordinal(&self, shape: GridShape) -> usize {
        (self.hole * shape.players + self.player) * shape.rounds + self.round
    }
}
