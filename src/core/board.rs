//! The 3×3 board and the pieces on it.
//!
//! Cells are addressed by a row-major index 0–8:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! The board records only occupancy. Piece age lives in the move log, and
//! the rules in the `rules` module decide what may be placed where.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::category::Emoji;
use super::player::PlayerId;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A piece occupying one cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    /// The player the piece belongs to. Win detection keys on this alone.
    pub owner: PlayerId,
    /// The emoji drawn at placement time. Cosmetic.
    pub symbol: Emoji,
}

impl Piece {
    /// Create a new piece.
    #[must_use]
    pub fn new(owner: PlayerId, symbol: Emoji) -> Self {
        Self { owner, symbol }
    }
}

/// The 3×3 board: nine cells, each empty or holding one piece.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Piece>; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the piece at a cell, if any.
    ///
    /// Panics if `cell >= CELL_COUNT`; the rule engine validates indices
    /// before touching the board.
    #[must_use]
    pub fn piece_at(&self, cell: usize) -> Option<&Piece> {
        self.cells[cell].as_ref()
    }

    /// Check whether a cell is occupied.
    ///
    /// Panics if `cell >= CELL_COUNT`.
    #[must_use]
    pub fn is_occupied(&self, cell: usize) -> bool {
        self.cells[cell].is_some()
    }

    /// Place a piece on an empty cell.
    ///
    /// Panics if the cell is out of range or already occupied; callers
    /// check legality first.
    pub fn place(&mut self, cell: usize, piece: Piece) {
        assert!(self.cells[cell].is_none(), "Cell {} is occupied", cell);
        self.cells[cell] = Some(piece);
    }

    /// Remove and return the piece at a cell.
    ///
    /// Panics if `cell >= CELL_COUNT`.
    pub fn remove(&mut self, cell: usize) -> Option<Piece> {
        self.cells[cell].take()
    }

    /// Iterate over `(cell, piece)` for every occupied cell.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, &Piece)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|p| (i, p)))
    }

    /// Cell indices occupied by a player, in board order.
    ///
    /// Board order is not age order; the move log ranks age.
    #[must_use]
    pub fn cells_owned_by(&self, player: PlayerId) -> SmallVec<[usize; 3]> {
        self.pieces()
            .filter(|(_, p)| p.owner == player)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Check whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }
}
