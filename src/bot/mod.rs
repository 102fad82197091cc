//! Bot move generation strategies.

pub mod decision;

pub use decision::{BotPolicy, MoveGenerator, RandomMoveGenerator};
