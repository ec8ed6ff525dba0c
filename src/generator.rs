use crate::grid::Cell;

/// Source of the initial pieces of a [`Board`](crate::Board).
///
/// A board calls [`next_piece`](Generator::next_piece) once per cell while it is being made, row by row, and never again.
/// Yielding an empty cell is allowed and leaves a gap in the grid.
///
/// Any `FnMut() -> Cell<T>` closure is a generator.
pub trait Generator<T> {
    /// Produce the next cell.
    fn next_piece(&mut self) -> Cell<T>;
}

impl<T, F> Generator<T> for F
where
    F: FnMut() -> Cell<T>,
{
    fn next_piece(&mut self) -> Cell<T> {
        self()
    }
}
