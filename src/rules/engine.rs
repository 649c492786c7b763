//! Move application and match lifecycle.
//!
//! All operations are pure transitions: they take `&MatchState`, return a
//! new state, and leave the input untouched. A rejected move returns a
//! [`RuleViolation`] and nothing else — the caller's state is exactly as it
//! was, including the RNG stream, so repeating a rejected call yields the
//! identical rejection.
//!
//! ## Move application order
//!
//! `apply_move` runs its steps in a fixed order because the capacity rule
//! depends on piece counts being consistent when it fires:
//!
//! 1. Reject decided matches and out-of-range cells.
//! 2. Rank the acting player's live cells oldest-first by log order.
//! 3. At capacity, reject a placement targeting the cell the eviction is
//!    about to vacate (the refill rule — more specific than plain
//!    occupancy, so it takes precedence for that one cell), then reject
//!    any other occupied cell.
//! 4. Draw the acting player's symbol from their category.
//! 5. At capacity, evict the oldest piece and log the removal.
//! 6. Place the new piece and log the placement.
//! 7. Detect a win (or a full board). On a win: set winner and line, bump
//!    the score, keep the turn.
//! 8. Otherwise rotate the turn to the other player.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::core::{
    Category, Emoji, MatchPhase, MatchState, MoveRecord, Piece, PlayerId, PlayerMap, CELL_COUNT,
};

use super::win::find_winning_line;

/// Maximum number of live pieces a player may have on the board.
pub const PIECE_CAPACITY: usize = 3;

/// A rejected `apply_move` call.
///
/// All variants are caller-input errors, detected before any mutation.
/// The state passed in is unchanged, whatever the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleViolation {
    /// The cell index is outside 0–8.
    OutOfRangeCell { cell: usize },
    /// The target cell already holds a piece.
    CellOccupied { cell: usize },
    /// The match already has a winner (or ended drawn); no further
    /// placements are accepted.
    MatchAlreadyDecided,
    /// The target is the cell the capacity rule would vacate this turn.
    /// The one legality rule that depends on the placement target, not
    /// just occupancy.
    IllegalRefillTarget { cell: usize },
}

impl std::fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleViolation::OutOfRangeCell { cell } => {
                write!(f, "cell index {} is out of range (0-8)", cell)
            }
            RuleViolation::CellOccupied { cell } => {
                write!(f, "cell {} is already occupied", cell)
            }
            RuleViolation::MatchAlreadyDecided => {
                write!(f, "the match is already decided")
            }
            RuleViolation::IllegalRefillTarget { cell } => {
                write!(f, "cell {} was just vacated and cannot be refilled this turn", cell)
            }
        }
    }
}

impl std::error::Error for RuleViolation {}

/// A discrete signal the presentation layer maps to audio/animation cues.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A piece landed on a cell.
    Placed {
        player: PlayerId,
        cell: usize,
        symbol: Emoji,
    },
    /// The capacity rule evicted a piece.
    Vanished { player: PlayerId, cell: usize },
    /// Three cells in a line are uniformly owned; the match is over.
    Won { player: PlayerId, line: [usize; 3] },
    /// The board filled with no winner.
    Drawn,
}

/// The result of a successful `apply_move`: the successor state plus the
/// events this move produced, in occurrence order.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveApplied {
    /// The new authoritative state.
    pub state: MatchState,
    /// What happened, for cue mapping. At most an eviction, a placement,
    /// and a terminal event.
    pub events: SmallVec<[MatchEvent; 3]>,
}

impl MoveApplied {
    /// The cell the capacity rule vacated this move, if any.
    #[must_use]
    pub fn vanished_cell(&self) -> Option<usize> {
        self.events.iter().find_map(|e| match e {
            MatchEvent::Vanished { cell, .. } => Some(*cell),
            _ => None,
        })
    }

    /// Whether this move ended the match.
    #[must_use]
    pub fn decided(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, MatchEvent::Won { .. } | MatchEvent::Drawn))
    }
}

/// Bind both players' categories and advance to the coin toss.
///
/// Panics if the two categories share an ID.
#[instrument(skip(state, categories), level = "debug")]
pub fn select_categories(state: &MatchState, categories: PlayerMap<Category>) -> MatchState {
    let mut next = state.clone();
    next.bind_categories(categories);
    next.phase = MatchPhase::AwaitingToss;
    next
}

/// Start a match: empty board, empty log, `first_player` to move.
///
/// Scores carry forward from `prior` — a new match continues the session.
/// Resetting scores is [`reset_session`], a separate, explicit operation.
///
/// Panics if the two categories share an ID.
#[instrument(skip(prior, categories), level = "debug")]
pub fn new_match(
    prior: &MatchState,
    first_player: PlayerId,
    categories: PlayerMap<Category>,
) -> MatchState {
    let mut next = MatchState::with_rng(prior.rng.clone());
    next.bind_categories(categories);
    next.phase = MatchPhase::InProgress;
    next.current_player = first_player;
    next.scores = prior.scores.clone();
    next
}

/// Return to category selection: scores zeroed, categories unbound.
#[instrument(skip(state), level = "debug")]
pub fn reset_session(state: &MatchState) -> MatchState {
    MatchState::with_rng(state.rng.clone())
}

/// Apply a placement on `cell` for the current player.
///
/// On success, returns the successor state and the move's events. On
/// rejection, returns the violation kind; the input state is unchanged and
/// the call is idempotent.
///
/// Panics if called before categories are bound (i.e. before `new_match`);
/// that is a sequencing bug in the caller, not a rejectable move.
#[instrument(skip(state), level = "debug", fields(player = %state.current_player))]
pub fn apply_move(state: &MatchState, cell: usize) -> Result<MoveApplied, RuleViolation> {
    if state.phase == MatchPhase::Decided || state.winner.is_some() {
        debug!("rejected: match already decided");
        return Err(RuleViolation::MatchAlreadyDecided);
    }
    if cell >= CELL_COUNT {
        debug!(cell, "rejected: out of range");
        return Err(RuleViolation::OutOfRangeCell { cell });
    }

    let player = state.current_player;
    let live = state.live_cells_by_age(player);
    let at_capacity = live.len() >= PIECE_CAPACITY;

    if at_capacity && cell == live[0] {
        debug!(cell, "rejected: refilling the cell being vacated");
        return Err(RuleViolation::IllegalRefillTarget { cell });
    }
    if state.board.is_occupied(cell) {
        debug!(cell, "rejected: occupied");
        return Err(RuleViolation::CellOccupied { cell });
    }

    let category = state
        .category(player)
        .cloned()
        .unwrap_or_else(|| panic!("apply_move called before {} bound a category", player));

    // Work on a clone; every rejection has already returned, so the
    // caller's state (RNG included) is only ever replaced wholesale.
    let mut next = state.clone();
    let mut events: SmallVec<[MatchEvent; 3]> = SmallVec::new();

    let symbol = category.random_symbol(&mut next.rng);

    if at_capacity {
        let oldest = live[0];
        next.board.remove(oldest);
        let seq = next.next_sequence();
        next.record_move(MoveRecord::removal(player, oldest, seq));
        events.push(MatchEvent::Vanished {
            player,
            cell: oldest,
        });
    }

    next.board.place(cell, Piece::new(player, symbol.clone()));
    let seq = next.next_sequence();
    next.record_move(MoveRecord::placement(player, cell, symbol.clone(), seq));
    events.push(MatchEvent::Placed {
        player,
        cell,
        symbol,
    });

    if let Some((winner, line)) = find_winning_line(&next.board) {
        next.winner = Some(winner);
        next.winning_line = Some(line);
        next.scores[winner] += 1;
        next.phase = MatchPhase::Decided;
        // The winning move does not rotate the turn.
        events.push(MatchEvent::Won {
            player: winner,
            line,
        });
        debug!(%winner, ?line, "match decided");
    } else if next.board.is_full() {
        // Unreachable while the capacity rule caps occupancy at six cells;
        // kept so a full board is a terminal state rather than a lockout.
        next.phase = MatchPhase::Decided;
        events.push(MatchEvent::Drawn);
        debug!("match drawn");
    } else {
        next.current_player = player.other();
    }

    Ok(MoveApplied {
        state: next,
        events,
    })
}
