use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::score::GameSummary;
use crate::view::results::render_results;

const PAGE_STYLE: &str = r"
body { font-family: -apple-system, sans-serif; text-align: center; }
.player-card, .scorecard { max-width: 300px; margin: 1em auto; padding: 1em; border-radius: 10px; }
.round-scores { display: flex; justify-content: center; gap: 12px; }
.relative.under { color: green; }
.relative.over { color: red; }
.relative.even { color: gray; }
.average { color: blue; font-size: small; }
.tally { color: gray; font-size: x-small; }
.cell.focused { outline: 2px solid blue; }
.progress-bar { position: relative; height: 1em; }
.centerline { position: absolute; left: 50%; width: 1px; height: 100%; background: black; }
.bar { position: absolute; height: 100%; font-size: x-small; }
.bar.negative { background: green; }
.bar.positive { background: red; }
";

#[must_use]
pub fn render_page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="sv" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(PAGE_STYLE)) }
            }
            body {
                (body)
            }
        }
    }
}

#[must_use]
pub fn render_results_page(summary: &GameSummary) -> Markup {
    render_page("Minigolf Scorecard", render_results(summary))
}
