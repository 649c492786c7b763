//! Property tests over arbitrary move sequences.
//!
//! Any sequence of cell indices is fed through `apply_move`; rejections
//! are allowed (the caller keeps its state), and the invariants must hold
//! after every accepted move.

use blink_tac_toe::{
    apply_move, new_match, CategoryCatalog, CategoryId, MatchPhase, MatchState, PlayerId,
    PlayerMap, CELL_COUNT, PIECE_CAPACITY,
};
use proptest::prelude::*;

fn categories() -> PlayerMap<blink_tac_toe::Category> {
    let catalog = CategoryCatalog::builtin();
    PlayerMap::from_pair(
        catalog.get(CategoryId::new(0)).unwrap().clone(),
        catalog.get(CategoryId::new(5)).unwrap().clone(),
    )
}

proptest! {
    /// Neither player ever holds more than three live pieces, and total
    /// occupancy never exceeds six cells.
    #[test]
    fn live_cells_never_exceed_capacity(
        seed in any::<u64>(),
        cells in prop::collection::vec(0usize..CELL_COUNT, 1..80),
    ) {
        let mut state = new_match(&MatchState::new(seed), PlayerId::One, categories());

        for &cell in &cells {
            if let Ok(applied) = apply_move(&state, cell) {
                state = applied.state;
            }
            for player in PlayerId::all() {
                prop_assert!(state.live_cells_by_age(player).len() <= PIECE_CAPACITY);
            }
            prop_assert!(state.board.occupied_count() <= 2 * PIECE_CAPACITY);
        }
    }

    /// A fourth placement always evicts exactly the oldest live piece —
    /// the one ranked first by log order — and never any other.
    #[test]
    fn eviction_always_removes_the_oldest(
        seed in any::<u64>(),
        cells in prop::collection::vec(0usize..CELL_COUNT, 1..80),
    ) {
        let mut state = new_match(&MatchState::new(seed), PlayerId::One, categories());

        for &cell in &cells {
            let live_before = state.live_cells_by_age(state.current_player);
            let at_capacity = live_before.len() >= PIECE_CAPACITY;

            if let Ok(applied) = apply_move(&state, cell) {
                if at_capacity {
                    prop_assert_eq!(applied.vanished_cell(), Some(live_before[0]));
                } else {
                    prop_assert_eq!(applied.vanished_cell(), None);
                }
                state = applied.state;
            }
        }
    }

    /// Turns alternate strictly on accepted non-winning moves; the
    /// winning move leaves the turn with the winner.
    #[test]
    fn turn_alternates_until_decided(
        seed in any::<u64>(),
        cells in prop::collection::vec(0usize..CELL_COUNT, 1..80),
    ) {
        let mut state = new_match(&MatchState::new(seed), PlayerId::One, categories());

        for &cell in &cells {
            let mover = state.current_player;
            if let Ok(applied) = apply_move(&state, cell) {
                state = applied.state;
                if state.winner.is_some() {
                    prop_assert_eq!(state.current_player, mover);
                    prop_assert_eq!(state.winner, Some(mover));
                    break;
                }
                prop_assert_eq!(state.current_player, mover.other());
            } else {
                prop_assert_eq!(state.current_player, mover);
            }
        }
    }

    /// Rejections never change the state: board, log, turn, and RNG
    /// position all stay put.
    #[test]
    fn rejection_is_a_no_op(
        seed in any::<u64>(),
        cells in prop::collection::vec(0usize..CELL_COUNT, 1..40),
        bad_cell in CELL_COUNT..usize::MAX,
    ) {
        let mut state = new_match(&MatchState::new(seed), PlayerId::One, categories());
        for &cell in &cells {
            if let Ok(applied) = apply_move(&state, cell) {
                state = applied.state;
            }
        }

        let log_len = state.move_log.len();
        let rng_pos = state.rng.state();
        let mover = state.current_player;

        prop_assert!(apply_move(&state, bad_cell).is_err());
        prop_assert_eq!(state.move_log.len(), log_len);
        prop_assert_eq!(state.rng.state(), rng_pos);
        prop_assert_eq!(state.current_player, mover);
    }

    /// The winner is set iff one of the eight lines is uniformly owned,
    /// and a decided match is frozen.
    #[test]
    fn winner_matches_board_lines(
        seed in any::<u64>(),
        cells in prop::collection::vec(0usize..CELL_COUNT, 1..80),
    ) {
        let mut state = new_match(&MatchState::new(seed), PlayerId::One, categories());

        for &cell in &cells {
            if let Ok(applied) = apply_move(&state, cell) {
                state = applied.state;
            }

            let line_owner = blink_tac_toe::rules::find_winning_line(&state.board)
                .map(|(player, _)| player);
            prop_assert_eq!(state.winner, line_owner);
            if state.winner.is_some() {
                prop_assert_eq!(state.phase, MatchPhase::Decided);
            }
        }
    }
}
