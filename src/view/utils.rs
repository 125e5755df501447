use maud::{Markup, html};

use crate::model::{RelativeTone, ScoreDisplay, format_relative};

/// Card background keyed on the regulars' initials; anyone else gets the neutral grey.
#[must_use]
pub fn player_background(name: &str) -> &'static str {
    match name.trim().to_uppercase().as_str() {
        "W" => "rgba(0, 122, 255, 0.2)",
        "A" => "rgba(52, 199, 89, 0.2)",
        "D" => "rgba(255, 59, 48, 0.2)",
        _ => "rgba(142, 142, 147, 0.05)",
    }
}

pub fn relative_badge(relative: i64) -> Markup {
    let tone = RelativeTone::from_relative(relative);
    html! {
        span class=(format!("relative {}", tone.css_class())) { (format_relative(relative)) }
    }
}

pub fn strokes_with_shape(strokes: u32) -> Markup {
    let disp = ScoreDisplay::from_strokes(strokes);
    let shape = match disp {
        ScoreDisplay::Ace => "◆",
        ScoreDisplay::Par => "●",
        ScoreDisplay::Bogey | ScoreDisplay::Over => "▲",
    };

    html! {
        span class=(disp.css_class()) { (shape) " " (strokes) }
    }
}
