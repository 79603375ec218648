use crate::{Lane, ReplayCommand};

/// Shortest bridge the game accepts.
pub const MIN_BRIDGE_LEN: usize = 3;
/// Longest bridge the game accepts.
pub const MAX_BRIDGE_LEN: usize = 20;

/// The error type for user input validation.
///
/// Every variant is user-correctable: the console layer reports it and
/// reissues the same prompt. Engine misuse (calling a state-machine method
/// in the wrong state) is deliberately NOT represented here; that is a
/// programming error and panics instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidInput {
    NotANumber,
    LengthOutOfRange { len: i64 },
    UnknownCharacter,
    NotAMoveCommand,
    NotAReplayCommand,
}

impl std::error::Error for InvalidInput {}

impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInput::NotANumber => write!(f, "The bridge length must be a whole number"),
            InvalidInput::LengthOutOfRange { len } => write!(
                f,
                "The bridge length must be between {} and {}, got {}",
                MIN_BRIDGE_LEN, MAX_BRIDGE_LEN, len
            ),
            InvalidInput::UnknownCharacter => {
                write!(f, "Expected one of the characters U, D, R or Q")
            }
            InvalidInput::NotAMoveCommand => {
                write!(f, "Expected U (upper lane) or D (lower lane)")
            }
            InvalidInput::NotAReplayCommand => write!(f, "Expected R (retry) or Q (quit)"),
        }
    }
}

// The tokens accepted anywhere in the game, checked before the per-prompt
// semantic validation so that "not a known character" and "known character,
// wrong prompt" report differently.
fn check_known_character(token: &str) -> Result<(), InvalidInput> {
    match token {
        "U" | "D" | "R" | "Q" => Ok(()),
        _ => Err(InvalidInput::UnknownCharacter),
    }
}

/// Validates a raw bridge-size token: an integer in
/// [[`MIN_BRIDGE_LEN`], [`MAX_BRIDGE_LEN`]].
pub fn parse_bridge_size(token: &str) -> Result<usize, InvalidInput> {
    let len: i64 = token.parse().map_err(|_| InvalidInput::NotANumber)?;
    if !(MIN_BRIDGE_LEN as i64..=MAX_BRIDGE_LEN as i64).contains(&len) {
        return Err(InvalidInput::LengthOutOfRange { len });
    }
    Ok(len as usize)
}

/// Validates a raw move token: `U` or `D`, case-sensitive.
pub fn parse_move(token: &str) -> Result<Lane, InvalidInput> {
    check_known_character(token)?;
    match token {
        "U" => Ok(Lane::Upper),
        "D" => Ok(Lane::Lower),
        _ => Err(InvalidInput::NotAMoveCommand),
    }
}

/// Validates a raw replay token: `R` or `Q`, case-sensitive.
pub fn parse_replay(token: &str) -> Result<ReplayCommand, InvalidInput> {
    check_known_character(token)?;
    match token {
        "R" => Ok(ReplayCommand::Retry),
        "Q" => Ok(ReplayCommand::Quit),
        _ => Err(InvalidInput::NotAReplayCommand),
    }
}
