//! Core engine types: players, RNG, board, categories, moves, match state.
//!
//! This module contains the building blocks the rule engine operates on.
//! Nothing here applies game rules; the `rules` module does that.

pub mod board;
pub mod category;
pub mod moves;
pub mod player;
pub mod rng;
pub mod state;

pub use board::{Board, Piece, CELL_COUNT};
pub use category::{Category, CategoryCatalog, CategoryId, Emoji};
pub use moves::{MoveKind, MoveRecord};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{MatchPhase, MatchState};
