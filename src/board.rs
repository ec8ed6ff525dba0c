use std::fmt::{Display, Formatter};

use itertools::{iproduct, Itertools};

use crate::cascade;
use crate::event::{BoardEvent, Listener, Listeners};
use crate::generator::Generator;
use crate::grid::{Cell, Cells, Grid, Swapped};
use crate::position::Position;
use crate::scanner::{self, Match};
use crate::step::{Axis, Step};

/// A fixed size grid of pieces of type `T` which reports matches to its listeners as pieces are swapped.
///
/// The board only ever compares pieces for equality.
/// It never removes, drops or regenerates pieces; consumers do that in response to [`BoardEvent`]s if they wish.
///
/// Boards with gaps or a known layout are easiest to make with a [`BoardBuilder`](crate::builder::BoardBuilder).
pub struct Board<T> {
    pub(crate) grid: Grid<T>,
    pub(crate) listeners: Listeners<T>,
}

impl<T> Board<T>
where
    T: PartialEq + Clone,
{
    /// Make a board of `width` columns and `height` rows, calling `generator` once per cell in row-major order.
    ///
    /// Either dimension may be 0, leaving a board with no cells.
    pub fn new<G: Generator<T>>(mut generator: G, width: usize, height: usize) -> Self {
        Self::from_grid(Grid::generate(&mut generator, width, height))
    }

    pub(crate) fn from_grid(grid: Grid<T>) -> Self {
        Self {
            grid,
            listeners: Listeners::default(),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Every position on the board, row by row and left to right within each row.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        iproduct!(0..self.height(), 0..self.width()).map(Position::from)
    }

    /// The cell at `position`, or [`None`] if `position` is off the board.
    pub fn piece(&self, position: Position) -> Option<&Cell<T>> {
        self.grid.cell(position)
    }

    /// Whether the piece at `position` is part of a horizontal or vertical run of at least three.
    pub fn has_match_at(&self, position: Position) -> bool {
        self.grid.has_match_at(position)
    }

    /// Whether swapping `first` and `second` is allowed and would make a match.
    ///
    /// The two positions must be distinct, on the board, and share a row or a column; they need not be adjacent.
    /// The swap is judged on a view of the board, which is never changed.
    /// Matches are looked for at both positions and at the cells left and right of each.
    pub fn can_move(&self, first: Position, second: Position) -> bool {
        if first == second || !first.is_aligned_with(second) {
            return false;
        }
        if self.grid.index_of(first).is_none() || self.grid.index_of(second).is_none() {
            return false;
        }

        let swapped = Swapped::new(&self.grid, first, second);
        [first, second].into_iter()
            .flat_map(|p| [p, Step::Right.attempt_from(p), Step::Left.attempt_from(p)])
            .any(|p| swapped.has_match_at(p))
    }

    /// Swap `first` and `second` if [`can_move`](Self::can_move) allows it, then report to every listener:
    ///
    /// 1. a [`BoardEvent::Match`] for each horizontal match, then each vertical match, on the swapped board;
    /// 2. a [`BoardEvent::Match`] for each cascading match (see [`find_cascading_matches`](Self::find_cascading_matches));
    /// 3. a single [`BoardEvent::Refill`] if there were no cascading matches.
    ///
    /// Returns `false`, changing nothing and reporting nothing, if the move is not allowed.
    /// Apart from the swap, the board is left as it was.
    pub fn make_move(&mut self, first: Position, second: Position) -> bool {
        if !self.can_move(first, second) {
            return false;
        }
        let (Some(a), Some(b)) = (self.grid.index_of(first), self.grid.index_of(second)) else {
            return false;
        };
        self.grid.swap(a, b);

        let cascading = self.find_cascading_matches();
        let refill = cascading.is_empty().then_some(BoardEvent::Refill);
        let events = self.find_horizontal_matches().into_iter()
            .chain(self.find_vertical_matches())
            .chain(cascading)
            .map(BoardEvent::Match)
            .chain(refill)
            .collect_vec();

        self.listeners.broadcast(&events);
        true
    }

    /// Register `listener` to be called with every event, after all listeners registered before it.
    pub fn add_listener<L>(&mut self, listener: L)
    where
        L: Listener<T> + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    /// Every window of three identical pieces in a row, top row first, left to right.
    /// Overlapping windows are each reported.
    pub fn find_horizontal_matches(&self) -> Vec<Match<T>> {
        scanner::find_matches(&self.grid, Axis::Horizontal)
    }

    /// Every window of three identical pieces in a column, leftmost column first, top to bottom.
    /// Overlapping windows are each reported.
    pub fn find_vertical_matches(&self) -> Vec<Match<T>> {
        scanner::find_matches(&self.grid, Axis::Vertical)
    }

    /// Each empty cell which, were the piece directly above it to fall in, would hold a match.
    ///
    /// Probes run from the bottom row up and left to right, one fall at a time; each match names only the landing position.
    pub fn find_cascading_matches(&self) -> Vec<Match<T>> {
        cascade::find_cascading_matches(&self.grid)
    }
}

impl<T: Display> Display for Board<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.grid.lanes(Axis::Horizontal) {
            for (_, cell) in row {
                match cell {
                    Some(piece) => write!(f, "{}", piece)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
