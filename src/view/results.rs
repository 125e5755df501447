use maud::{Markup, html};
use std::fmt::Write;

use crate::model::format_relative;
use crate::score::{GameSummary, PlayerSummary};
use crate::view::chart::render_delta_chart;
use crate::view::utils::{player_background, relative_badge};

#[must_use]
pub fn render_player_card(player: &PlayerSummary) -> Markup {
    html! {
        div class="player-card" data-player=(player.name)
            style=(format!("background-color: {};", player_background(&player.name))) {
            h2 { (player.name) }
            div class="round-scores" {
                @for round in &player.rounds {
                    div class="round" data-round=(round.round) {
                        div class="total" { (round.total) }
                        (relative_badge(round.relative))
                    }
                }
            }
            p class="average" { (format!("Snitt: {:.1}", player.average)) }
            p class="tally" {
                span class="ones" { (player.tally.ones) }
                " / "
                span class="twos" { (player.tally.twos) }
                " / "
                span class="threes" { (player.tally.threes) }
            }
            (render_delta_chart(player))
        }
    }
}

#[must_use]
pub fn render_results(summary: &GameSummary) -> Markup {
    html! {
        h1 { "Resultat" }
        div class="results" {
            @for player in &summary.players {
                (render_player_card(player))
            }
        }
    }
}

/// Terminal rendering of the results cards.
#[must_use]
pub fn results_text(summary: &GameSummary) -> String {
    let mut out = String::from("Resultat\n");
    for player in &summary.players {
        let _ = writeln!(out, "\n{}", player.name);
        let rounds: Vec<String> = player
            .rounds
            .iter()
            .map(|r| format!("R{}: {} ({})", r.round, r.total, format_relative(r.relative)))
            .collect();
        let _ = writeln!(out, "  {}", rounds.join("  "));
        let _ = writeln!(out, "  Snitt: {:.1}", player.average);
        let _ = writeln!(
            out,
            "  {} / {} / {}",
            player.tally.ones, player.tally.twos, player.tally.threes
        );
    }
    out
}
