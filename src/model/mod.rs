pub mod cursor;
pub mod matrix;
pub mod player;
pub mod score;

pub use cursor::{Cursor, GridShape};
pub use matrix::{HOLE_COUNT, MAX_STROKES, PAR_PER_HOLE, ScoreCell, ScoreMatrix, parse_cell};
pub use player::{Player, players_from_names};
pub use score::{RelativeTone, ScoreDisplay, format_relative};
