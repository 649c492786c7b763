//! Match state: the single authoritative value the engine transitions.
//!
//! ## MatchState
//!
//! Everything a match is: board, whose turn it is, the move log, the
//! decided winner (if any), cumulative scores, the players' bound
//! categories, and the session RNG.
//!
//! The presentation layer owns exactly one `MatchState` at a time and
//! replaces it wholesale with each engine result — never merges. The state
//! is only mutated through the operations in the `rules` module.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Board;
use super::category::Category;
use super::moves::{MoveKind, MoveRecord};
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;

/// Where the match is in its lifecycle.
///
/// `AwaitingCategories → AwaitingToss → InProgress → Decided`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Players have not yet bound categories.
    AwaitingCategories,
    /// Categories bound; the coin toss has not picked a first mover.
    AwaitingToss,
    /// Moves are being applied.
    InProgress,
    /// A winner was found, or the board filled without one.
    Decided,
}

/// Complete match state.
///
/// Uses `im::Vector` for the move log so cloning the state (which
/// `apply_move` does on every call) shares structure instead of copying.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchState {
    /// Lifecycle phase.
    pub phase: MatchPhase,

    /// The 3×3 board.
    pub board: Board,

    /// The player whose turn it is.
    pub current_player: PlayerId,

    /// Append-only record of placements and evictions for this match.
    pub move_log: Vector<MoveRecord>,

    /// The winner, once one of the eight lines is uniformly owned.
    pub winner: Option<PlayerId>,

    /// The cell triple that won the match.
    pub winning_line: Option<[usize; 3]>,

    /// Cumulative win counts for the session.
    pub scores: PlayerMap<u32>,

    /// Each player's bound category; `None` before setup completes.
    categories: PlayerMap<Option<Category>>,

    /// Session RNG for symbol draws and the coin toss.
    pub rng: GameRng,
}

impl MatchState {
    /// Create a fresh session state with a seeded RNG.
    ///
    /// Starts in `AwaitingCategories` with zeroed scores and no categories
    /// bound. `current_player` defaults to Player 1 until the coin toss
    /// seeds it through `new_match`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create a fresh session state from an existing RNG.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            phase: MatchPhase::AwaitingCategories,
            board: Board::new(),
            current_player: PlayerId::One,
            move_log: Vector::new(),
            winner: None,
            winning_line: None,
            scores: PlayerMap::with_value(0),
            categories: PlayerMap::with_default(),
            rng,
        }
    }

    /// A player's bound category, if setup has assigned one.
    #[must_use]
    pub fn category(&self, player: PlayerId) -> Option<&Category> {
        self.categories[player].as_ref()
    }

    /// Bind both players' categories.
    ///
    /// Panics if the two categories share an ID; setup must hand each
    /// player a distinct category.
    pub(crate) fn bind_categories(&mut self, categories: PlayerMap<Category>) {
        assert!(
            categories[PlayerId::One].id != categories[PlayerId::Two].id,
            "Players must bind distinct categories"
        );
        self.categories = categories.map(|_, c| Some(c.clone()));
    }

    /// The sequence number the next appended record will carry.
    #[must_use]
    pub fn next_sequence(&self) -> u32 {
        self.move_log.len() as u32
    }

    /// Append a record to the move log.
    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        debug_assert_eq!(record.sequence, self.next_sequence());
        self.move_log.push_back(record);
    }

    /// A player's live cells, oldest first.
    ///
    /// Scans the board for the player's occupied cells, then ranks each by
    /// the position of its most recent `Place` record in the move log. Log
    /// order — not board index — is the age ranking the capacity rule uses.
    #[must_use]
    pub fn live_cells_by_age(&self, player: PlayerId) -> SmallVec<[usize; 3]> {
        let owned = self.board.cells_owned_by(player);

        let mut ranked: SmallVec<[(usize, usize); 3]> = SmallVec::new();
        for &cell in &owned {
            let last_place = self
                .move_log
                .iter()
                .enumerate()
                .rev()
                .find(|(_, m)| m.is_placement_on(player, cell))
                .map(|(pos, _)| pos);
            if let Some(pos) = last_place {
                ranked.push((pos, cell));
            }
        }

        ranked.sort_unstable();
        ranked.into_iter().map(|(_, cell)| cell).collect()
    }

    /// Count a player's placements (not evictions) so far this match.
    #[must_use]
    pub fn placements_by(&self, player: PlayerId) -> usize {
        self.move_log
            .iter()
            .filter(|m| m.kind == MoveKind::Place && m.player == player)
            .count()
    }
}
