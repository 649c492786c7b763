//! Move records: the append-only history of placements and removals.
//!
//! The engine maintains one record sequence for the whole match. Its append
//! order is the sole ranking of piece age — the capacity rule evicts the
//! live piece whose most recent `Place` record is earliest in the log.

use serde::{Deserialize, Serialize};

use super::category::Emoji;
use super::player::PlayerId;

/// What a move record describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// A piece was placed on a cell.
    Place,
    /// A piece was evicted from a cell by the capacity rule.
    Remove,
}

/// One entry in the match's move log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player whose turn produced this record.
    pub player: PlayerId,
    /// The cell the record refers to.
    pub cell: usize,
    /// Placement or capacity eviction.
    pub kind: MoveKind,
    /// The symbol placed; `None` for removals.
    pub symbol: Option<Emoji>,
    /// Position in the log (0-based, assigned at append).
    pub sequence: u32,
}

impl MoveRecord {
    /// Record a placement.
    #[must_use]
    pub fn placement(player: PlayerId, cell: usize, symbol: Emoji, sequence: u32) -> Self {
        Self {
            player,
            cell,
            kind: MoveKind::Place,
            symbol: Some(symbol),
            sequence,
        }
    }

    /// Record a capacity eviction.
    #[must_use]
    pub fn removal(player: PlayerId, cell: usize, sequence: u32) -> Self {
        Self {
            player,
            cell,
            kind: MoveKind::Remove,
            symbol: None,
            sequence,
        }
    }

    /// Check whether this record is a placement by `player` on `cell`.
    #[must_use]
    pub fn is_placement_on(&self, player: PlayerId, cell: usize) -> bool {
        self.kind == MoveKind::Place && self.player == player && self.cell == cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_record() {
        let record = MoveRecord::placement(PlayerId::One, 4, Emoji::from("🐶"), 0);

        assert_eq!(record.kind, MoveKind::Place);
        assert_eq!(record.symbol, Some(Emoji::from("🐶")));
        assert!(record.is_placement_on(PlayerId::One, 4));
        assert!(!record.is_placement_on(PlayerId::Two, 4));
        assert!(!record.is_placement_on(PlayerId::One, 5));
    }

    #[test]
    fn test_removal_record() {
        let record = MoveRecord::removal(PlayerId::Two, 7, 3);

        assert_eq!(record.kind, MoveKind::Remove);
        assert_eq!(record.symbol, None);
        assert!(!record.is_placement_on(PlayerId::Two, 7));
    }

    #[test]
    fn test_serialization() {
        let record = MoveRecord::placement(PlayerId::Two, 8, Emoji::from("🍕"), 12);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
