use ndarray::Ix;

pub(crate) type Coord = isize;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A position `{ row, col }` on a board. The top left corner is row 0, column 0.
///
/// Positions are not checked when made; any pair of integers is a position, and lookups outside the board simply find nothing.
pub struct Position {
    /// Row, counted from the top.
    pub row: Coord,
    /// Column, counted from the left.
    pub col: Coord,
}

impl Position {
    /// Shorthand for `Position { row, col }`.
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }

    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self::new(self.row.wrapping_add(rhs.0), self.col.wrapping_add(rhs.1))
    }

    /// The `ndarray` index of this position on a grid of `(height, width)`, or [`None`] if it lies outside.
    pub(crate) fn as_index(&self, shape: (usize, usize)) -> Option<(Ix, Ix)> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row < shape.0 && col < shape.1).then_some((row, col))
    }

    /// Whether `self` and `other` share a row or a column.
    pub(crate) fn is_aligned_with(&self, other: Position) -> bool {
        self.row == other.row || self.col == other.col
    }
}

impl From<(Ix, Ix)> for Position {
    fn from(value: (Ix, Ix)) -> Self {
        // grids never get anywhere near isize::MAX cells along an axis
        Self::new(value.0 as Coord, value.1 as Coord)
    }
}
