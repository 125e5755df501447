use maud::{Markup, html};
use std::fmt::Write;

use crate::model::{Cursor, ScoreMatrix, format_relative};
use crate::score::round_relative;
use crate::view::utils::{player_background, relative_badge, strokes_with_shape};

/// Entry grid for one player: a row per hole, a column per round, and the
/// relative-to-par line underneath. The focused cell carries the `focused` class.
#[must_use]
pub fn render_scorecard(matrix: &ScoreMatrix, player: usize, cursor: &Cursor) -> Markup {
    let Some(current) = matrix.players().get(player) else {
        return html! {};
    };

    html! {
        div class="scorecard" data-player=(current.name)
            style=(format!("background-color: {};", player_background(&current.name))) {
            h2 { (current.name) }
            table class="styled-table" {
                thead {
                    tr {
                        th { "Hål" }
                        @for round in 0..matrix.round_count() {
                            th { "Runda " (round + 1) }
                        }
                    }
                }
                tbody {
                    @for hole in 0..matrix.hole_count() {
                        tr {
                            td { (hole + 1) }
                            @for round in 0..matrix.round_count() {
                                @let focused = *cursor == Cursor::new(player, hole, round);
                                td class=(if focused { "cell focused" } else { "cell" })
                                    data-hole=(hole + 1) data-round=(round + 1) {
                                    @match matrix.cell(player, hole, round) {
                                        Some(strokes) => { (strokes_with_shape(strokes)) }
                                        None => { "-" }
                                    }
                                }
                            }
                        }
                    }
                }
                tfoot {
                    tr class="relative-row" {
                        td { "Score" }
                        @for round in 0..matrix.round_count() {
                            td { (relative_badge(round_relative(matrix, player, round))) }
                        }
                    }
                }
            }
        }
    }
}

/// Plain-text variant of the grid for the terminal.
#[must_use]
pub fn scorecard_text(matrix: &ScoreMatrix, player: usize, cursor: &Cursor) -> String {
    let Some(current) = matrix.players().get(player) else {
        return String::new();
    };

    let mut out = String::new();
    let _ = write!(out, "{}\n{:>4}", current.name, "Hål");
    for round in 0..matrix.round_count() {
        let _ = write!(out, " {:>9}", format!("Runda {}", round + 1));
    }
    let _ = writeln!(out);

    for hole in 0..matrix.hole_count() {
        let _ = write!(out, "{:>4}", hole + 1);
        for round in 0..matrix.round_count() {
            let text = matrix
                .cell(player, hole, round)
                .map_or_else(|| "-".to_string(), |v| v.to_string());
            let marked = if *cursor == Cursor::new(player, hole, round) {
                format!("[{text}]")
            } else {
                text
            };
            let _ = write!(out, " {marked:>9}");
        }
        let _ = writeln!(out);
    }

    let _ = write!(out, "{:>4}", "");
    for round in 0..matrix.round_count() {
        let relative = format_relative(round_relative(matrix, player, round));
        let _ = write!(out, " {relative:>9}");
    }
    let _ = writeln!(out);
    out
}
