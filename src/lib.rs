//! # blink-tac-toe
//!
//! Rule engine for Blink Tac Toe: a two-player tic-tac-toe variant where
//! pieces are random emoji drawn from a per-player category, and each player
//! may hold at most three live pieces — placing a fourth evicts the oldest.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `apply_move` never mutates its input. It returns
//!    a successor `MatchState` (or a rejection) and the caller replaces its
//!    single authoritative state with the result.
//!
//! 2. **Log-Ordered Age**: the append-only move log is the sole ranking of
//!    piece age. Board indices and wall-clock time never enter into it.
//!
//! 3. **Injectable Randomness**: symbol draws and the coin toss go through
//!    a seedable `GameRng`, so every sequence is reproducible in tests.
//!
//! ## Modules
//!
//! - `core`: players, RNG, board, categories, move records, match state
//! - `rules`: move application, capacity rule, win/draw detection, lifecycle
//! - `toss`: the coin toss resolver (independent of game state)
//!
//! The crate has no I/O surface. A presentation layer owns the current
//! `MatchState`, calls [`toss::resolve`] once per match, then drives
//! [`rules::apply_move`] with user-selected cells and renders each result.

pub mod core;
pub mod rules;
pub mod toss;

// Re-export commonly used types
pub use crate::core::{
    Board, Category, CategoryCatalog, CategoryId, Emoji, GameRng, GameRngState, MatchPhase,
    MatchState, MoveKind, MoveRecord, Piece, PlayerId, PlayerMap, CELL_COUNT,
};

pub use crate::rules::{
    apply_move, new_match, reset_session, select_categories, MatchEvent, MoveApplied,
    RuleViolation, PIECE_CAPACITY, WINNING_LINES,
};

pub use crate::toss::{CoinFace, TossOutcome};
