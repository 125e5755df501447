use serde::{Deserialize, Serialize};
use std::fmt;

/// A player as entered at session start. Names are free text and need not be unique;
/// the position in the player list is what identifies a player inside the matrix.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for Player {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Player {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

#[must_use]
pub fn players_from_names<I, S>(names: I) -> Vec<Player>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Player::new).collect()
}
