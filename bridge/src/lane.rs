use serde::{Deserialize, Serialize};

/// One of the two lanes a bridge tile can sit on.
///
/// The same type is used for the true per-tile value and for the player's
/// guess at that tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lane {
    #[serde(rename = "U")]
    Upper,
    #[serde(rename = "D")]
    Lower,
}

impl Lane {
    pub fn other(self) -> Lane {
        match self {
            Lane::Upper => Lane::Lower,
            Lane::Lower => Lane::Upper,
        }
    }

    /// The single-character token the console layer accepts for this lane.
    pub fn token(self) -> char {
        match self {
            Lane::Upper => 'U',
            Lane::Lower => 'D',
        }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// What the player wants to do after a failed crossing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplayCommand {
    #[serde(rename = "R")]
    Retry,
    #[serde(rename = "Q")]
    Quit,
}

impl std::fmt::Display for ReplayCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayCommand::Retry => write!(f, "R"),
            ReplayCommand::Quit => write!(f, "Q"),
        }
    }
}
