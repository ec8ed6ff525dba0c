//! Invariants of the board under randomly generated grids and swaps.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tilematch::{Board, BoardEvent, BoardEventKind, Position};

/// Three piece kinds and gaps, so that matches and falls both turn up often.
fn random_board(width: usize, height: usize, seed: u64) -> Board<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    Board::new(move || {
        let n = rng.random_range(0..4u8);
        (n != 0).then_some(n)
    }, width, height)
}

fn snapshot(board: &Board<u8>) -> Vec<Option<u8>> {
    board.positions().map(|p| board.piece(p).copied().flatten()).collect()
}

fn record(board: &mut Board<u8>) -> Rc<RefCell<Vec<BoardEvent<u8>>>> {
    let heard = Rc::new(RefCell::new(Vec::new()));
    let sink = heard.clone();
    board.add_listener(move |event: &BoardEvent<u8>| sink.borrow_mut().push(event.clone()));
    heard
}

fn swap_partner(first: Position, along_row: bool, offset: isize) -> Position {
    if along_row {
        Position::new(first.row, first.col + offset)
    } else {
        Position::new(first.row + offset, first.col)
    }
}

proptest! {
    #[test]
    fn piece_absent_iff_off_board(width in 0usize..7, height in 0usize..7, seed in any::<u64>()) {
        let board = random_board(width, height, seed);

        for row in -2..height as isize + 2 {
            for col in -2..width as isize + 2 {
                let on_board = (0..height as isize).contains(&row) && (0..width as isize).contains(&col);
                prop_assert_eq!(board.piece(Position::new(row, col)).is_some(), on_board);
            }
        }
    }

    #[test]
    fn never_swaps_with_self(width in 0usize..7, height in 0usize..7, seed in any::<u64>(), row in -1isize..8, col in -1isize..8) {
        let board = random_board(width, height, seed);
        let position = Position::new(row, col);

        prop_assert!(!board.can_move(position, position));
    }

    #[test]
    fn can_move_changes_nothing(
        width in 1usize..7,
        height in 1usize..7,
        seed in any::<u64>(),
        (row, col) in (-1isize..8, -1isize..8),
        (other_row, other_col) in (-1isize..8, -1isize..8),
    ) {
        let board = random_board(width, height, seed);
        let before = snapshot(&board);

        board.can_move(Position::new(row, col), Position::new(other_row, other_col));
        prop_assert_eq!(snapshot(&board), before);
    }

    #[test]
    fn move_swaps_exactly_two_cells_or_nothing(
        width in 1usize..7,
        height in 1usize..7,
        seed in any::<u64>(),
        (row, col) in (0isize..7, 0isize..7),
        along_row in any::<bool>(),
        offset in -6isize..7,
    ) {
        let mut board = random_board(width, height, seed);
        let heard = record(&mut board);
        let first = Position::new(row, col);
        let second = swap_partner(first, along_row, offset);

        let before = snapshot(&board);
        let allowed = board.can_move(first, second);
        prop_assert_eq!(board.make_move(first, second), allowed);
        let after = snapshot(&board);

        if !allowed {
            prop_assert_eq!(after, before);
            prop_assert!(heard.borrow().is_empty());
            return Ok(());
        }

        let index = |p: Position| p.row as usize * width + p.col as usize;
        let mut expected = before.clone();
        expected.swap(index(first), index(second));
        prop_assert_eq!(after, expected);
    }

    #[test]
    fn refill_only_without_cascade(
        width in 1usize..7,
        height in 1usize..7,
        seed in any::<u64>(),
        (row, col) in (0isize..7, 0isize..7),
        along_row in any::<bool>(),
        offset in -6isize..7,
    ) {
        let mut board = random_board(width, height, seed);
        let heard = record(&mut board);
        let first = Position::new(row, col);

        if !board.make_move(first, swap_partner(first, along_row, offset)) {
            return Ok(());
        }

        let events = heard.borrow();
        let found = board.find_horizontal_matches().len() + board.find_vertical_matches().len();
        let cascading = board.find_cascading_matches().len();
        let kinds: Vec<BoardEventKind> = events.iter().map(BoardEventKind::from).collect();

        prop_assert!(found > 0);
        prop_assert_eq!(kinds.iter().filter(|k| **k == BoardEventKind::Match).count(), found + cascading);
        prop_assert!(!kinds.contains(&BoardEventKind::Move) && !kinds.contains(&BoardEventKind::Swap));
        if cascading == 0 {
            prop_assert_eq!(kinds.last(), Some(&BoardEventKind::Refill));
            prop_assert_eq!(kinds.iter().filter(|k| **k == BoardEventKind::Refill).count(), 1);
        } else {
            prop_assert!(!kinds.contains(&BoardEventKind::Refill));
        }
    }
}
