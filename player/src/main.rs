use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tilematch::{Board, BoardEvent, BoardEventKind, Step};

const PIECES: [char; 5] = ['R', 'G', 'B', 'Y', 'P'];

fn main() {
    let seed = std::env::args().nth(1).and_then(|arg| arg.parse().ok()).unwrap_or(7);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(|| Some(PIECES[rng.random_range(0..PIECES.len())]), 8, 8);

    board.add_listener(|event: &BoardEvent<char>| match event {
        BoardEvent::Match(found) => println!(
            "match {} at {}",
            found.matched,
            found.positions.iter().map(|p| format!("({}, {})", p.row, p.col)).collect::<Vec<_>>().join(" "),
        ),
        other => println!("{}", <&str>::from(BoardEventKind::from(other)).to_lowercase()),
    });

    println!("seed {}\n{}", seed, board);

    // adjacent swaps only; the board would also take longer ones along a row or column
    let candidate = board.positions()
        .flat_map(|p| [Step::Right, Step::Down].map(|step| (p, step.attempt_from(p))))
        .find(|(first, second)| board.can_move(*first, *second));

    match candidate {
        Some((first, second)) => {
            println!("swap ({}, {}) with ({}, {})", first.row, first.col, second.row, second.col);
            board.make_move(first, second);
            println!("{}", board);
        }
        None => println!("no swap makes a match"),
    }
}
