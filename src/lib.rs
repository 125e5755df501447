pub mod args;
pub mod error;
pub mod export;
pub mod logging;
pub mod model;
pub mod mvu;
pub mod repl;
pub mod score;
pub mod view;

pub use error::ScorecardError;
pub use export::to_csv;
pub use model::{Cursor, GridShape, HOLE_COUNT, PAR_PER_HOLE, Player, ScoreMatrix};
pub use score::{GameSummary, ScoreTally};
