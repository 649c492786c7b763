//! Win detection over the eight fixed lines.

use crate::core::{Board, PlayerId};

/// The eight winning lines, in scan order: rows, columns, diagonals.
///
/// Scan order is fixed so the reported line is deterministic even on
/// adversarially constructed boards with more than one completed line.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Find a completed line, if any.
///
/// A line is won when all three cells are occupied by the same owner.
/// Returns the first such line in [`WINNING_LINES`] order.
#[must_use]
pub fn find_winning_line(board: &Board) -> Option<(PlayerId, [usize; 3])> {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        if let (Some(pa), Some(pb), Some(pc)) =
            (board.piece_at(a), board.piece_at(b), board.piece_at(c))
        {
            if pa.owner == pb.owner && pa.owner == pc.owner {
                return Some((pa.owner, line));
            }
        }
    }
    None
}
