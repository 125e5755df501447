use maud::{Markup, html};

use crate::score::PlayerSummary;
use crate::view::types::{Bar, DeltaBars, Direction};

const STEP_FACTOR: f64 = 5.0;
const HALF_WIDTH: f64 = 50.0;

/// Lays the running delta out as bars growing from a centreline: under par to the
/// left, over par to the right. Widths shrink together when the largest bar would run
/// past the edge.
#[must_use]
pub fn preprocess_delta_bars(summary: &PlayerSummary) -> DeltaBars {
    let widest = summary
        .delta
        .iter()
        .map(|d| d.abs() * STEP_FACTOR)
        .fold(0.0_f64, f64::max);

    let scaling_factor = if widest > HALF_WIDTH {
        HALF_WIDTH / widest
    } else {
        1.0
    };

    let bars = summary
        .delta
        .iter()
        .enumerate()
        .map(|(hole_idx, &delta)| {
            let width = delta.abs() * STEP_FACTOR * scaling_factor;
            let (direction, start_position) = if delta < 0.0 {
                (Direction::Left, HALF_WIDTH - width)
            } else if delta > 0.0 {
                (Direction::Right, HALF_WIDTH)
            } else {
                (Direction::Center, HALF_WIDTH)
            };
            Bar {
                delta,
                direction,
                start_position,
                width,
                hole: hole_idx + 1,
            }
        })
        .collect();

    DeltaBars {
        player_name: summary.name.clone(),
        final_delta: summary.delta.last().copied().unwrap_or(0.0),
        bars,
    }
}

#[must_use]
pub fn render_delta_chart(summary: &PlayerSummary) -> Markup {
    let chart = preprocess_delta_bars(summary);

    html! {
        div class="delta-chart" data-player=(chart.player_name) {
            @for bar in &chart.bars {
                @let bar_class = match bar.direction {
                    Direction::Left => "bar negative",
                    Direction::Right => "bar positive",
                    Direction::Center => "bar even",
                };
                div class=(format!("bar-row {}", if bar.hole % 2 == 0 { "even" } else { "odd" })) {
                    span class="hole-label" { (bar.hole) }
                    div class="progress-bar" {
                        div class="centerline" {}
                        div class=(bar_class) data-hole=(bar.hole)
                            style=(format!("left: {}%; width: {}%;", bar.start_position, bar.width)) {
                            (format!("{:+}", bar.delta))
                        }
                    }
                }
            }
        }
    }
}
