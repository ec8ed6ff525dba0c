use std::iter::successors;

use ndarray::{Array2, Axis as ArrayAxis, Ix};
use strum::VariantArray;

use crate::generator::Generator;
use crate::position::Position;
use crate::step::Axis;

/// The contents of one grid cell. [`None`] is the empty cell, which never takes part in a match.
pub type Cell<T> = Option<T>;

/// Shortest run of identical pieces which counts as a match.
pub const MIN_RUN: usize = 3;

/// Read access to grid cells by [`Position`], shared by the grid itself and by views layered over it.
pub(crate) trait Cells {
    type Piece;

    /// The cell at `position`, or [`None`] if `position` lies outside the grid.
    fn cell(&self, position: Position) -> Option<&Cell<Self::Piece>>;

    fn piece(&self, position: Position) -> Option<&Self::Piece> {
        self.cell(position).and_then(Option::as_ref)
    }

    /// Length of the run of pieces equal to the one at `position` along `axis`, counting `position` itself.
    /// Empty and out of bounds positions have a run length of 0.
    fn run_length(&self, position: Position, axis: Axis) -> usize
    where
        Self::Piece: PartialEq,
    {
        let Some(piece) = self.piece(position) else {
            return 0;
        };

        1 + axis.steps().iter()
            .map(|step| successors(Some(step.attempt_from(position)), |p| Some(step.attempt_from(*p)))
                .take_while(|p| self.piece(*p) == Some(piece))
                .count())
            .sum::<usize>()
    }

    /// Whether the piece at `position` sits in a run of at least [`MIN_RUN`] along either axis.
    fn has_match_at(&self, position: Position) -> bool
    where
        Self::Piece: PartialEq,
    {
        Axis::VARIANTS.iter().any(|axis| self.run_length(position, *axis) >= MIN_RUN)
    }
}

/// Row-major store of cells, `height` rows by `width` columns.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Grid<T> {
    cells: Array2<Cell<T>>,
}

impl<T> Grid<T> {
    /// Fill a new grid by calling `generator` exactly `width * height` times, row by row.
    pub(crate) fn generate<G: Generator<T>>(generator: &mut G, width: usize, height: usize) -> Self {
        // the default (C) layout is filled in row-major order
        Self { cells: Array2::from_shape_simple_fn((height, width), || generator.next_piece()) }
    }

    pub(crate) fn from_cells(cells: Array2<Cell<T>>) -> Self {
        Self { cells }
    }

    pub(crate) fn width(&self) -> usize {
        self.cells.ncols()
    }

    pub(crate) fn height(&self) -> usize {
        self.cells.nrows()
    }

    pub(crate) fn index_of(&self, position: Position) -> Option<(Ix, Ix)> {
        position.as_index(self.cells.dim())
    }

    /// Exchange the contents of two in-bounds cells.
    pub(crate) fn swap(&mut self, a: (Ix, Ix), b: (Ix, Ix)) {
        self.cells.swap(a, b)
    }

    /// Every row (for [`Axis::Horizontal`]) or every column (for [`Axis::Vertical`]) in order,
    /// each as its cells in order along the lane, paired with their positions.
    pub(crate) fn lanes(&self, axis: Axis) -> impl Iterator<Item = impl Iterator<Item = (Position, &Cell<T>)> + '_> + '_ {
        // a row is a lane along the column axis and vice versa
        let array_axis = match axis {
            Axis::Horizontal => ArrayAxis(1),
            Axis::Vertical => ArrayAxis(0),
        };

        self.cells.lanes(array_axis).into_iter().enumerate().map(move |(lane, cells)| {
            cells.into_iter().enumerate().map(move |(along, cell)| {
                let index = match axis {
                    Axis::Horizontal => (lane, along),
                    Axis::Vertical => (along, lane),
                };
                (Position::from(index), cell)
            })
        })
    }
}

impl<T> Cells for Grid<T> {
    type Piece = T;

    fn cell(&self, position: Position) -> Option<&Cell<T>> {
        self.cells.get(self.index_of(position)?)
    }
}

/// A view of some cells as if the contents at two positions had been exchanged.
///
/// Both positions must be in bounds of the underlying cells.
pub(crate) struct Swapped<'a, C> {
    inner: &'a C,
    pair: (Position, Position),
}

impl<'a, C> Swapped<'a, C> {
    pub(crate) fn new(inner: &'a C, first: Position, second: Position) -> Self {
        Self { inner, pair: (first, second) }
    }
}

impl<'a, C: Cells> Cells for Swapped<'a, C> {
    type Piece = C::Piece;

    fn cell(&self, position: Position) -> Option<&Cell<C::Piece>> {
        let (first, second) = self.pair;
        self.inner.cell(match position {
            p if p == first => second,
            p if p == second => first,
            p => p,
        })
    }
}
