//! The coin toss resolver.
//!
//! Picks the starting player for a match. The displayed coin face and the
//! chosen first mover are drawn independently — a coin showing heads does
//! not mean Player 1 starts. This mirrors the observed product behavior
//! and is deliberate; see DESIGN.md before "fixing" it.
//!
//! The resolver is a leaf: it reads no game state and has no side effect
//! beyond advancing the RNG it is handed. The presentation layer animates
//! the reveal on its own schedule and seeds the new match's
//! `current_player` with [`TossOutcome::first_player`].

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::core::{GameRng, PlayerId};

/// The face the coin lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinFace {
    Heads,
    Tails,
}

impl std::fmt::Display for CoinFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoinFace::Heads => write!(f, "heads"),
            CoinFace::Tails => write!(f, "tails"),
        }
    }
}

/// The result of one coin toss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TossOutcome {
    /// The face shown to the players.
    pub face: CoinFace,
    /// The player who moves first. Independent of `face`.
    pub first_player: PlayerId,
}

/// Toss the coin: two independent uniform draws.
#[instrument(skip(rng), level = "debug")]
pub fn resolve(rng: &mut GameRng) -> TossOutcome {
    let face = if rng.gen_bool(0.5) {
        CoinFace::Heads
    } else {
        CoinFace::Tails
    };
    let first_player = if rng.gen_bool(0.5) {
        PlayerId::One
    } else {
        PlayerId::Two
    };
    TossOutcome { face, first_player }
}
