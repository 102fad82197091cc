//! Bot move generation.
//!
//! The resolver never draws randomness itself; it asks a
//! [`MoveGenerator`] for the bot's move each round. Production wiring
//! uses [`RandomMoveGenerator`]; tests inject scripted or seeded
//! generators to make round outcomes deterministic.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::game::entities::{DEFAULT_BOMB_PROBABILITY, GameSettings, Move};

/// Strategy seam for bot move generation.
///
/// `bomb_available` is false once the bot's one-time bomb is spent;
/// well-behaved generators never return [`Move::Bomb`] in that case.
/// The resolver tolerates a generator that does anyway (the bomb flag
/// is simply re-set), so a misbehaving strategy cannot corrupt the
/// session invariants.
pub trait MoveGenerator {
    fn next_move(&mut self, bomb_available: bool) -> Move;
}

/// Tunable parameters for the stochastic bot policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BotPolicy {
    /// Chance of playing the bomb on a round where it is available.
    /// Must be within `[0.0, 1.0]`.
    pub bomb_probability: f64,
}

impl Default for BotPolicy {
    fn default() -> Self {
        Self {
            bomb_probability: DEFAULT_BOMB_PROBABILITY,
        }
    }
}

impl From<&GameSettings> for BotPolicy {
    fn from(settings: &GameSettings) -> Self {
        Self {
            bomb_probability: settings.bomb_probability,
        }
    }
}

/// The default bot: while its bomb is available, plays it with the
/// configured probability; otherwise draws uniformly from the standard
/// moves. Bomb timing is a stochastic event, not a scheduled one.
#[derive(Debug)]
pub struct RandomMoveGenerator {
    rng: StdRng,
    policy: BotPolicy,
}

impl RandomMoveGenerator {
    /// OS-seeded generator with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(BotPolicy::default())
    }

    /// OS-seeded generator with an explicit policy.
    #[must_use]
    pub fn with_policy(policy: BotPolicy) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            policy,
        }
    }

    /// OS-seeded generator drawing its policy from session settings.
    #[must_use]
    pub fn with_settings(settings: &GameSettings) -> Self {
        Self::with_policy(settings.into())
    }

    /// Deterministic generator for reproducible sessions and tests.
    #[must_use]
    pub fn from_seed(seed: u64, settings: &GameSettings) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            policy: settings.into(),
        }
    }
}

impl Default for RandomMoveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveGenerator for RandomMoveGenerator {
    fn next_move(&mut self, bomb_available: bool) -> Move {
        if bomb_available && self.rng.random_bool(self.policy.bomb_probability) {
            return Move::Bomb;
        }
        match self.rng.random_range(0..3) {
            0 => Move::Rock,
            1 => Move::Paper,
            _ => Move::Scissors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_replays_the_same_sequence() {
        let settings = GameSettings::default();
        let mut a = RandomMoveGenerator::from_seed(42, &settings);
        let mut b = RandomMoveGenerator::from_seed(42, &settings);
        for _ in 0..100 {
            assert_eq!(a.next_move(true), b.next_move(true));
        }
    }

    #[test]
    fn test_never_bombs_once_unavailable() {
        let mut generator = RandomMoveGenerator::from_seed(7, &GameSettings::default());
        for _ in 0..1_000 {
            assert_ne!(generator.next_move(false), Move::Bomb);
        }
    }

    #[test]
    fn test_bomb_frequency_tracks_policy() {
        let mut generator = RandomMoveGenerator::from_seed(1, &GameSettings::default());
        let trials = 2_000;
        let bombs = (0..trials)
            .filter(|_| generator.next_move(true) == Move::Bomb)
            .count();

        // Expected ~200 at p = 0.1; bounds are wide enough that a
        // correct implementation cannot plausibly fail them.
        assert!(
            (120..=280).contains(&bombs),
            "bomb drawn {bombs} times out of {trials}"
        );
    }

    #[test]
    fn test_standard_draws_cover_all_three_moves() {
        let mut generator = RandomMoveGenerator::from_seed(3, &GameSettings::default());
        let mut seen = [false; 3];
        for _ in 0..300 {
            match generator.next_move(false) {
                Move::Rock => seen[0] = true,
                Move::Paper => seen[1] = true,
                Move::Scissors => seen[2] = true,
                Move::Bomb => unreachable!("bomb drawn while unavailable"),
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_zero_probability_policy_never_bombs() {
        let policy = BotPolicy {
            bomb_probability: 0.0,
        };
        let mut generator = RandomMoveGenerator {
            rng: StdRng::seed_from_u64(5),
            policy,
        };
        for _ in 0..500 {
            assert_ne!(generator.next_move(true), Move::Bomb);
        }
    }
}
