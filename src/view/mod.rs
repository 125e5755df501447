pub mod chart;
pub mod page;
pub mod results;
pub mod scorecard;
pub mod types;
pub mod utils;

pub use chart::{preprocess_delta_bars, render_delta_chart};
pub use page::{render_page, render_results_page};
pub use results::{render_player_card, render_results, results_text};
pub use scorecard::{render_scorecard, scorecard_text};
pub use utils::player_background;
