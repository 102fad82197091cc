//! Core game logic: entities and the round-resolution state machine.

pub mod entities;
pub mod session;

pub use entities::{
    DEFAULT_BOMB_PROBABILITY, DEFAULT_MAX_ROUNDS, GameSettings, Move, ParseMoveError, PlayedMove,
    RoundRecord, TurnResponse, Winner,
};
pub use session::{GameError, Session};
