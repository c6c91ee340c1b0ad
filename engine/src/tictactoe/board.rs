use super::error::{InvalidMoveReason, MoveError};
use super::types::{CELL_COUNT, Cell, Mark};

/// Nine cells in row-major order: 0 1 2 / 3 4 5 / 6 7 8.
///
/// Indices outside `0..9` are a caller bug and panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Builds a board from a 9-character picture such as `"XX_OO____"`.
    #[cfg(test)]
    pub fn from_pattern(pattern: &str) -> Self {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, ch) in pattern.chars().take(CELL_COUNT).enumerate() {
            cells[i] = match ch {
                'X' => Cell::X,
                'O' => Cell::O,
                _ => Cell::Empty,
            };
        }
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.cells[index].is_empty()
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty(index) {
            return Err(MoveError::invalid(InvalidMoveReason::CellOccupied(index)));
        }
        self.cells[index] = Cell::from(mark);
        Ok(())
    }

    /// Only for speculative evaluation on a scratch copy.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn snapshot(&self) -> Board {
        *self
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn empty_count(&self) -> usize {
        CELL_COUNT - self.filled_count()
    }
}
