use ndarray::{Array2, AssignElem};

use crate::board::Board;
use crate::generator::Generator;
use crate::grid::{Cell, Grid};
use crate::position::Position;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum BuilderInvalidReason {
    /// A row given to [`BoardBuilder::from_rows`] or [`BoardBuilder::from_text`] differs in length from the first row.
    #[error("row {row} has {found} cells but the first row has {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A cell was placed outside the board.
    #[error("position ({}, {}) is off the board", .position.row, .position.col)]
    PositionOutOfBounds {
        /// Where the cell was placed.
        position: Position,
    },
}

/// A builder for [`Board`]s, for when a plain [`Board::new`] is not enough: boards with a known layout or with gaps.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once invalid, a builder ignores further changes and refuses to build.
#[derive(Clone, Debug)]
pub struct BoardBuilder<T> {
    cells: Array2<Cell<T>>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl<T> BoardBuilder<T>
where
    T: PartialEq + Clone,
{
    /// Construct an empty builder of `width` columns and `height` rows, specified in that order; every cell starts empty.
    pub fn with_dims(dims: (usize, usize)) -> Self {
        Self {
            cells: Array2::from_shape_simple_fn((dims.1, dims.0), Cell::default),
            invalid_reasons: Default::default(),
        }
    }

    /// Construct a builder holding `rows`, top row first.
    ///
    /// Every row must be as long as the first, or the builder becomes invalid with [`RaggedRow`](BuilderInvalidReason::RaggedRow).
    pub fn from_rows<R, I>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = Cell<T>>,
    {
        let rows: Vec<Vec<Cell<T>>> = rows.into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        let width = rows.first().map_or(0, Vec::len);

        let mut builder = Self::with_dims((width, rows.len()));
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                builder.invalid_reasons.push(BuilderInvalidReason::RaggedRow { row, expected: width, found: cells.len() });
                return builder;
            }
            for (col, cell) in cells.into_iter().enumerate() {
                builder.cells[(row, col)].assign_elem(cell);
            }
        }

        builder
    }

    /// Replace every cell, row by row, with one from `generator`.
    ///
    /// If the builder is already in an invalid state, this function does nothing and does not call `generator`.
    pub fn generate_with<G: Generator<T>>(&mut self, mut generator: G) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.cells.iter_mut().for_each(|cell| cell.assign_elem(generator.next_piece()));
        self
    }

    /// Put `cell` at `position`, which may be [`None`] to leave a gap.
    ///
    /// May cause the builder to enter a [`PositionOutOfBounds`](BuilderInvalidReason::PositionOutOfBounds) invalid state if `position` is off the board.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn place(&mut self, position: Position, cell: Cell<T>) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        match position.as_index(self.cells.dim()) {
            Some(index) => self.cells[index].assign_elem(cell),
            None => self.invalid_reasons.push(BuilderInvalidReason::PositionOutOfBounds { position }),
        }

        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`] with no listeners.
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board<T>, &Vec<BuilderInvalidReason>> {
        if let Some(reasons) = self.is_valid() {
            return Err(reasons);
        }

        Ok(Board::from_grid(Grid::from_cells(self.cells.clone())))
    }
}

impl BoardBuilder<char> {
    /// Construct a builder from lines of text, one character per cell; `.` is an empty cell.
    ///
    /// Blank lines and surrounding whitespace are skipped, so a board can be written as an indented multi-line literal.
    pub fn from_text(text: &str) -> Self {
        Self::from_rows(text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(|c| (c != '.').then_some(c))))
    }
}
