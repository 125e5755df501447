use serde::{Deserialize, Serialize};

use crate::model::matrix::PAR_PER_HOLE;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    Ace,
    Par,
    Bogey,
    Over,
}

impl ScoreDisplay {
    #[must_use]
    pub fn from_strokes(strokes: u32) -> Self {
        match i64::from(strokes) - i64::from(PAR_PER_HOLE) {
            i64::MIN..=-1 => ScoreDisplay::Ace,
            0 => ScoreDisplay::Par,
            1 => ScoreDisplay::Bogey,
            _ => ScoreDisplay::Over,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            ScoreDisplay::Ace => "ace",
            ScoreDisplay::Par => "par",
            ScoreDisplay::Bogey => "bogey",
            ScoreDisplay::Over => "over",
        }
    }
}

impl From<u32> for ScoreDisplay {
    fn from(value: u32) -> Self {
        Self::from_strokes(value)
    }
}

/// Sign of a relative-to-par value. Under par is the good side.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RelativeTone {
    Under,
    Even,
    Over,
}

impl RelativeTone {
    #[must_use]
    pub fn from_relative(relative: i64) -> Self {
        match relative {
            r if r < 0 => RelativeTone::Under,
            0 => RelativeTone::Even,
            _ => RelativeTone::Over,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            RelativeTone::Under => "under",
            RelativeTone::Even => "even",
            RelativeTone::Over => "over",
        }
    }
}

/// `+0`, `+3`, `-2`.
#[must_use]
pub fn format_relative(relative: i64) -> String {
    if relative >= 0 {
        format!("+{relative}")
    } else {
        relative.to_string()
    }
}
