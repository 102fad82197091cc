//! # RPS Plus
//!
//! Deterministic rule engine for a best-of-three rock-paper-scissors
//! variant where each side also holds a one-time bomb: the bomb beats
//! every standard move and draws against an opposing bomb.
//!
//! The engine is designed to sit behind an external narration layer
//! (for example a conversational agent calling it as a tool): the
//! caller passes the user's raw move text, the engine validates it,
//! draws the bot's move, arbitrates the round, and returns a structured
//! record the caller can narrate verbatim. All game logic lives here;
//! the caller never recomputes outcomes.
//!
//! ## Architecture
//!
//! - A [`Session`] owns all mutable state for one game and exposes a
//!   single operation, [`Session::resolve_round`]. Sessions are plain
//!   values owned by the caller; there is no global state.
//! - Bot moves come from an injected [`MoveGenerator`] strategy, so
//!   production play is random while tests use seeded or scripted
//!   generators.
//! - Invalid input and bomb reuse are game events, not errors: they
//!   forfeit (waste) the round. The only rejection is resolving after
//!   the game is over.
//!
//! ## Example
//!
//! ```
//! use rps_plus::Session;
//!
//! let mut session = Session::seeded(7);
//! let record = session.resolve_round(" Rock ").expect("session just started");
//! assert_eq!(record.round_number, 1);
//! println!("{}", record.system_note);
//! ```

/// Core game logic, entities, and the round-resolution state machine.
pub mod game;
pub use game::{
    GameError, GameSettings, Move, PlayedMove, RoundRecord, Session, TurnResponse, Winner,
    entities::{DEFAULT_BOMB_PROBABILITY, DEFAULT_MAX_ROUNDS},
};

/// Bot move generation strategies.
pub mod bot;
pub use bot::{BotPolicy, MoveGenerator, RandomMoveGenerator};
