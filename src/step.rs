use strum::VariantArray;

use crate::position::Position;

/// A single orthogonal step across the grid.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Step {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Step {
    /// Attempt the step from `position` in the direction specified by `self` and return the resultant [`Position`].
    /// The result may lie outside the board.
    pub fn attempt_from(&self, position: Position) -> Position {
        match self {
            Self::Up => position.offset_by((-1, 0)),
            Self::Down => position.offset_by((1, 0)),
            Self::Left => position.offset_by((0, -1)),
            Self::Right => position.offset_by((0, 1)),
        }
    }
}

/// The two directions along which runs of pieces are counted.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug)]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
}

impl Axis {
    /// The two opposing steps which walk along this axis, "backward" first.
    pub fn steps(&self) -> [Step; 2] {
        match self {
            Self::Horizontal => [Step::Left, Step::Right],
            Self::Vertical => [Step::Up, Step::Down],
        }
    }
}
