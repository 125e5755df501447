pub mod aggregators;
pub mod summary;

pub use aggregators::{
    ScoreTally, delta_series, holes_counted, relative_to_par, round_relative, round_total,
    score_tally, session_average,
};
pub use summary::{GameSummary, PlayerSummary, RoundSummary};
