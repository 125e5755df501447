use serde::{Deserialize, Serialize};

use crate::model::{PAR_PER_HOLE, ScoreMatrix};

/// How many holes a player finished in exactly one, two or three strokes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreTally {
    pub ones: usize,
    pub twos: usize,
    pub threes: usize,
}

impl ScoreTally {
    #[must_use]
    pub fn count_of(&self, strokes: u32) -> usize {
        match strokes {
            1 => self.ones,
            2 => self.twos,
            3 => self.threes,
            _ => 0,
        }
    }
}

#[must_use]
pub fn round_total(matrix: &ScoreMatrix, player: usize, round: usize) -> u32 {
    matrix.round_cells(player, round).sum()
}

#[must_use]
pub fn holes_counted(matrix: &ScoreMatrix, player: usize, round: usize) -> usize {
    matrix.round_cells(player, round).count()
}

/// Strokes against the par of the holes actually played, so a half-finished round
/// reads the same as a finished one would at that point.
#[must_use]
pub fn relative_to_par(total: u32, holes_counted: usize, par_per_hole: u32) -> i64 {
    let holes = i64::try_from(holes_counted).unwrap_or(i64::MAX);
    i64::from(total) - i64::from(par_per_hole).saturating_mul(holes)
}

#[must_use]
pub fn round_relative(matrix: &ScoreMatrix, player: usize, round: usize) -> i64 {
    relative_to_par(
        round_total(matrix, player, round),
        holes_counted(matrix, player, round),
        PAR_PER_HOLE,
    )
}

/// Scores above three are deliberately left out of the tally.
#[must_use]
pub fn score_tally(matrix: &ScoreMatrix, player: usize) -> ScoreTally {
    matrix
        .player_cells(player)
        .fold(ScoreTally::default(), |mut tally, strokes| {
            match strokes {
                1 => tally.ones += 1,
                2 => tally.twos += 1,
                3 => tally.threes += 1,
                _ => {}
            }
            tally
        })
}

/// Cumulative strokes minus cumulative par, hole by hole. Only the first round is
/// read; an unset hole adds no strokes but still adds par.
#[must_use]
pub fn delta_series(matrix: &ScoreMatrix, player: usize) -> Vec<f64> {
    let mut running_total: u32 = 0;
    (0..matrix.hole_count())
        .map(|hole| {
            running_total += matrix.cell(player, hole, 0).unwrap_or(0);
            let par_so_far = (hole as f64 + 1.0) * f64::from(PAR_PER_HOLE);
            f64::from(running_total) - par_so_far
        })
        .collect()
}

#[must_use]
pub fn session_average(matrix: &ScoreMatrix, player: usize) -> f64 {
    let rounds = matrix.round_count();
    if rounds == 0 {
        return 0.0;
    }
    let sum: u32 = (0..rounds)
        .map(|round| round_total(matrix, player, round))
        .sum();
    f64::from(sum) / rounds as f64
}
