use itertools::Itertools;

use crate::grid::Grid;
use crate::position::Position;
use crate::step::Axis;

/// A match found on the board.
///
/// Matches found by scanning rows and columns list the three positions of one window, in scan order.
/// Matches found by cascade probing list only the position a falling piece would land on.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Match<T> {
    /// The piece which matched.
    pub matched: T,
    /// Where it matched.
    pub positions: Vec<Position>,
}

/// Report every window of three identical pieces along `axis`, lane by lane.
///
/// Windows overlap: a run of four reports two matches sharing two positions.
pub(crate) fn find_matches<T>(grid: &Grid<T>, axis: Axis) -> Vec<Match<T>>
where
    T: PartialEq + Clone,
{
    grid.lanes(axis)
        .flat_map(|lane| lane.tuple_windows().filter_map(|(a, b, c)| match (a.1, b.1, c.1) {
            (Some(x), Some(y), Some(z)) if x == y && y == z && x == z => Some(Match {
                matched: x.clone(),
                positions: vec![a.0, b.0, c.0],
            }),
            _ => None,
        }))
        .collect_vec()
}
