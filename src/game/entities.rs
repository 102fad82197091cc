use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

use super::session::GameError;

/// Rounds played before a session terminates.
pub const DEFAULT_MAX_ROUNDS: u32 = 3;

/// Chance that the bot plays its bomb on a round where it still has one.
pub const DEFAULT_BOMB_PROBABILITY: f64 = 0.1;

/// A single move in rock-paper-scissors-plus. The bomb beats every
/// standard move but each side may only play it once per session.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Bomb,
}

impl Move {
    /// Standard beats relation, evaluated from `self`'s perspective.
    /// Always false when either side is a bomb; bomb dominance is
    /// arbitrated separately.
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
            Self::Bomb => "bomb",
        };
        write!(f, "{repr}")
    }
}

/// Raw text didn't match the move vocabulary.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognized move")]
pub struct ParseMoveError;

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Case-folds and trims surrounding whitespace before matching,
    /// so `" Rock "` parses the same as `"rock"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            "bomb" => Ok(Self::Bomb),
            _ => Err(ParseMoveError),
        }
    }
}

/// The user's effective move as recorded for a resolved round.
///
/// Rounds forfeited on input are recorded too, so this is wider than
/// [`Move`]: a rejected second bomb gets its own variant rather than a
/// magic string, and unparseable input keeps the normalized text.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PlayedMove {
    /// A move from the valid vocabulary.
    Move(Move),
    /// The user tried to replay an already-consumed bomb.
    RejectedBombReuse,
    /// Input outside the vocabulary, normalized (trimmed, lowercased).
    Invalid(String),
}

impl fmt::Display for PlayedMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Move(mv) => mv.fmt(f),
            Self::RejectedBombReuse => write!(f, "invalid_bomb"),
            Self::Invalid(text) => write!(f, "{text}"),
        }
    }
}

// On the wire the effective move is a plain string so the narration
// layer can echo it directly.
impl Serialize for PlayedMove {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PlayedMove {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(match text.as_str() {
            "invalid_bomb" => Self::RejectedBombReuse,
            _ => match text.parse::<Move>() {
                Ok(mv) => Self::Move(mv),
                Err(ParseMoveError) => Self::Invalid(text),
            },
        })
    }
}

/// Outcome of a single round.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    User,
    Bot,
    Draw,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::User => "user",
            Self::Bot => "bot",
            Self::Draw => "draw",
        };
        write!(f, "{repr}")
    }
}

/// Result of one resolved round, appended to the session history and
/// returned to the caller for narration.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RoundRecord {
    /// 1-based round number, including wasted rounds.
    pub round_number: u32,
    /// The user's effective move after normalization and validation.
    pub user_move_played: PlayedMove,
    pub bot_move_played: Move,
    pub round_winner: Winner,
    /// Running score, formatted as `"User: <n> - Bot: <n>"`.
    pub current_score: String,
    pub game_over: bool,
    /// Human-readable note explaining the outcome; seeds the narration.
    pub system_note: String,
}

/// Envelope returned across the tool boundary.
///
/// Serializes with a `status` tag so a rejected call is a status marker
/// plus a plain-text message, with no game fields populated.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TurnResponse {
    /// A round was resolved.
    Round(RoundRecord),
    /// The call was rejected without touching session state.
    Error { message: String },
}

impl From<Result<RoundRecord, GameError>> for TurnResponse {
    fn from(result: Result<RoundRecord, GameError>) -> Self {
        match result {
            Ok(record) => Self::Round(record),
            Err(error) => Self::Error {
                message: error.to_string(),
            },
        }
    }
}

/// Session configuration.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct GameSettings {
    /// Rounds before the session terminates.
    pub max_rounds: u32,
    /// Chance of the bot playing its bomb while it still has one.
    pub bomb_probability: f64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROUNDS, DEFAULT_BOMB_PROBABILITY)
    }
}

impl GameSettings {
    #[must_use]
    pub const fn new(max_rounds: u32, bomb_probability: f64) -> Self {
        Self {
            max_rounds,
            bomb_probability,
        }
    }
}
