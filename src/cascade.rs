use crate::grid::{Cells, Grid, Swapped};
use crate::position::Position;
use crate::scanner::Match;
use crate::step::Step;

/// Report each landing position where a piece falling one row into the empty cell below it would match.
///
/// Rows are probed bottom to top and, within a row, left to right.
/// Each fall is looked at on its own through a [`Swapped`] view, so nothing on the grid moves and no probe sees another's fall.
pub(crate) fn find_cascading_matches<T>(grid: &Grid<T>) -> Vec<Match<T>>
where
    T: PartialEq + Clone,
{
    let mut found = Vec::new();

    for row in (0..grid.height()).rev() {
        for col in 0..grid.width() {
            let from = Position::from((row, col));
            let landing = Step::Down.attempt_from(from);

            let Some(piece) = grid.piece(from) else {
                continue;
            };
            // off the bottom, or a filled cell below; either way nothing falls
            if !matches!(grid.cell(landing), Some(None)) {
                continue;
            }

            if Swapped::new(grid, from, landing).has_match_at(landing) {
                found.push(Match { matched: piece.clone(), positions: vec![landing] });
            }
        }
    }

    found
}
