//! The rule engine: move legality, the capacity rule, win detection, and
//! match lifecycle operations.

pub mod engine;
pub mod win;

pub use engine::{
    apply_move, new_match, reset_session, select_categories, MatchEvent, MoveApplied,
    RuleViolation, PIECE_CAPACITY,
};
pub use win::{find_winning_line, WINNING_LINES};
