//! Round-resolution state machine for a single game session.
//!
//! A [`Session`] tracks everything mutable about one game: round and
//! score counters, one-time bomb flags for both sides, the terminal
//! flag, and the append-only round history. The session has two states,
//! active and over; the transition happens exactly when the round that
//! just resolved reaches `max_rounds`, and is one-way.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{GameSettings, Move, PlayedMove, RoundRecord, TurnResponse, Winner};
use crate::bot::{MoveGenerator, RandomMoveGenerator};

/// Errors that reject a resolve call outright. Everything else that can
/// go wrong with a turn (bad input, bomb reuse) is a game event and
/// resolves as a forfeited round instead.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum GameError {
    #[error("Game is already over.")]
    GameOver,
}

/// One game session, owned by the caller. No global state; run as many
/// concurrent sessions as you like, one resolver each.
#[derive(Debug)]
pub struct Session<G = RandomMoveGenerator> {
    settings: GameSettings,
    round_count: u32,
    user_score: u32,
    bot_score: u32,
    user_bomb_used: bool,
    bot_bomb_used: bool,
    game_over: bool,
    history: Vec<RoundRecord>,
    generator: G,
}

impl Session {
    /// New session with default settings and an OS-seeded bot.
    #[must_use]
    pub fn new() -> Self {
        let settings = GameSettings::default();
        Self::with_generator(settings, RandomMoveGenerator::with_settings(&settings))
    }

    /// New session whose bot move sequence is reproducible from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        let settings = GameSettings::default();
        Self::with_generator(settings, RandomMoveGenerator::from_seed(seed, &settings))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: MoveGenerator> Session<G> {
    /// New session with an injected move generation strategy.
    #[must_use]
    pub fn with_generator(settings: GameSettings, generator: G) -> Self {
        Self {
            settings,
            round_count: 0,
            user_score: 0,
            bot_score: 0,
            user_bomb_used: false,
            bot_bomb_used: false,
            game_over: false,
            history: Vec::with_capacity(settings.max_rounds as usize),
            generator,
        }
    }

    /// Resolve one round given the user's raw move text.
    ///
    /// Rejected with [`GameError::GameOver`] once the session is over;
    /// rejection mutates nothing and can be retried forever with the
    /// same result. Any accepted call consumes a round, even when the
    /// input is invalid or replays a spent bomb (those forfeit to the
    /// bot rather than erroring).
    pub fn resolve_round(&mut self, user_move: &str) -> Result<RoundRecord, GameError> {
        if self.game_over {
            debug!("resolve attempted after game over");
            return Err(GameError::GameOver);
        }

        let normalized = user_move.trim().to_lowercase();

        let bot_move = self.generator.next_move(!self.bot_bomb_used);
        if bot_move == Move::Bomb {
            self.bot_bomb_used = true;
        }

        // Invalid and rejected-bomb rounds are wasted, so the counter
        // advances on every accepted call.
        self.round_count += 1;

        let (user_move_played, round_winner, system_note) = match normalized.parse::<Move>() {
            Err(_) => (
                PlayedMove::Invalid(normalized),
                Winner::Bot,
                format!("Invalid move '{user_move}'. Round wasted."),
            ),
            Ok(Move::Bomb) if self.user_bomb_used => (
                PlayedMove::RejectedBombReuse,
                Winner::Bot,
                "You already used your bomb! Round wasted.".to_string(),
            ),
            Ok(mv) => {
                if mv == Move::Bomb {
                    self.user_bomb_used = true;
                }
                let (winner, note) = arbitrate(mv, bot_move);
                (PlayedMove::Move(mv), winner, note.to_string())
            }
        };

        match round_winner {
            Winner::User => self.user_score += 1,
            Winner::Bot => self.bot_score += 1,
            Winner::Draw => {}
        }

        if self.round_count >= self.settings.max_rounds {
            self.game_over = true;
            info!(
                "game over after round {}: user {} - bot {}",
                self.round_count, self.user_score, self.bot_score
            );
        }

        let record = RoundRecord {
            round_number: self.round_count,
            user_move_played,
            bot_move_played: bot_move,
            round_winner,
            current_score: self.current_score(),
            game_over: self.game_over,
            system_note,
        };
        debug!("round {} resolved: {}", record.round_number, record.system_note);

        self.history.push(record.clone());
        Ok(record)
    }

    /// Resolve one round and wrap the result in the tool-boundary
    /// envelope, so callers that only speak the wire shape never touch
    /// [`GameError`] directly.
    pub fn play_turn(&mut self, user_move: &str) -> TurnResponse {
        self.resolve_round(user_move).into()
    }

    /// Return every field to its zero state, keeping the generator.
    pub fn reset(&mut self) {
        self.round_count = 0;
        self.user_score = 0;
        self.bot_score = 0;
        self.user_bomb_used = false;
        self.bot_bomb_used = false;
        self.game_over = false;
        self.history.clear();
    }

    /// Running score, formatted as `"User: <n> - Bot: <n>"`.
    #[must_use]
    pub fn current_score(&self) -> String {
        format!("User: {} - Bot: {}", self.user_score, self.bot_score)
    }

    #[must_use]
    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    #[must_use]
    pub fn user_score(&self) -> u32 {
        self.user_score
    }

    #[must_use]
    pub fn bot_score(&self) -> u32 {
        self.bot_score
    }

    #[must_use]
    pub fn user_bomb_used(&self) -> bool {
        self.user_bomb_used
    }

    #[must_use]
    pub fn bot_bomb_used(&self) -> bool {
        self.bot_bomb_used
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Records of every resolved round, in order, wasted rounds included.
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }
}

/// Pure arbitration of two moves, evaluated from the user's
/// perspective. Only reached when nothing already forfeited the round,
/// so both moves are from the valid vocabulary. Priority order: draw,
/// user bomb, bot bomb, standard beats relation, bot wins.
fn arbitrate(user: Move, bot: Move) -> (Winner, &'static str) {
    if user == bot {
        (Winner::Draw, "Clash of wills!")
    } else if user == Move::Bomb {
        (Winner::User, "BOOM! User bomb destroys everything.")
    } else if bot == Move::Bomb {
        (Winner::Bot, "BOOM! Bot bomb destroys everything.")
    } else if user.beats(bot) {
        (Winner::User, "Clean hit.")
    } else {
        (Winner::Bot, "Bot counters effectively.")
    }
}
