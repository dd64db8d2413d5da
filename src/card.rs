//! The card grid and its cells.
//!
//! A [`Card`] is one 5x5 grid produced by one generation call, addressed by
//! `(row, col)` with both indices 0-based. Cells are a tagged variant rather
//! than a sentinel number, so the free space can never collide with a real
//! draw.

use serde::{Deserialize, Serialize};

use crate::core::config::HEADER_LEN;

/// Rows and columns of a card.
pub const CARD_SIZE: usize = HEADER_LEN;

/// Row of the free cell.
pub const FREE_ROW: usize = 2;

/// Column of the free cell.
pub const FREE_COL: usize = 2;

/// One cell of a card: a drawn number or the free space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// A drawn number.
    Number(u32),
    /// The automatically satisfied free space.
    Free,
}

impl Cell {
    /// Is this the free space?
    #[must_use]
    pub fn is_free(self) -> bool {
        matches!(self, Cell::Free)
    }

    /// The drawn number, or `None` for the free space.
    #[must_use]
    pub fn number(self) -> Option<u32> {
        match self {
            Cell::Number(n) => Some(n),
            Cell::Free => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Free => write!(f, "FREE"),
        }
    }
}

/// A 5x5 bingo card.
///
/// Owned by the caller; generation allocates a fresh card every time and no
/// state is shared between cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    cells: [[Cell; CARD_SIZE]; CARD_SIZE],
}

impl Card {
    /// Build a card from row-major cells.
    #[must_use]
    pub fn from_rows(cells: [[Cell; CARD_SIZE]; CARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Cell at `(row, col)`, both 0-indexed.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Overwrite the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; CARD_SIZE]> {
        self.cells.iter()
    }

    /// Iterate over the cells of one column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(move |row| row[col])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> Card {
        let mut cells = [[Cell::Free; CARD_SIZE]; CARD_SIZE];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = Cell::Number((r * CARD_SIZE + c + 1) as u32);
            }
        }
        cells[FREE_ROW][FREE_COL] = Cell::Free;
        Card::from_rows(cells)
    }

    #[test]
    fn test_cell_accessors() {
        assert!(Cell::Free.is_free());
        assert!(!Cell::Number(7).is_free());
        assert_eq!(Cell::Number(7).number(), Some(7));
        assert_eq!(Cell::Free.number(), None);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Number(42).to_string(), "42");
        assert_eq!(Cell::Free.to_string(), "FREE");
    }

    #[test]
    fn test_get_set() {
        let mut card = sample_card();
        assert_eq!(card.get(0, 0), Cell::Number(1));
        assert_eq!(card.get(FREE_ROW, FREE_COL), Cell::Free);

        card.set(0, 0, Cell::Number(99));
        assert_eq!(card.get(0, 0), Cell::Number(99));
    }

    #[test]
    fn test_column_iteration() {
        let card = sample_card();
        let col: Vec<Cell> = card.column(1).collect();
        assert_eq!(
            col,
            vec![
                Cell::Number(2),
                Cell::Number(7),
                Cell::Number(12),
                Cell::Number(17),
                Cell::Number(22),
            ]
        );
    }

    #[test]
    fn test_card_serde() {
        let card = sample_card();
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
