use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The times-table grid: header labels in the outer columns, answers inside.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<BoardCell>,
}

impl Board {
    pub fn new() -> Self {
        let mut cells: Array2<BoardCell> = Array2::default(SIZE.to_nd_index());
        for row in 0..ROWS {
            let label = u16::from(row) + 1;
            let first: Coord2 = (row, 0);
            cells[first.to_nd_index()] = BoardCell::Header(label);
            cells[(row, COLS - 1).to_nd_index()] = BoardCell::Header(label * 10);
        }
        Self { cells }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> BoardCell {
        self.cells[coords.to_nd_index()]
    }

    /// Replaces the answer text of an interior cell, returning the previous one.
    pub fn set_answer(&mut self, coords: Coord2, text: &str) -> Result<Answer> {
        let coords = self.validate_coords(coords)?;
        let answer = Answer::parse(text)?;

        match &mut self.cells[coords.to_nd_index()] {
            BoardCell::Header(_) => Err(GameError::ReadOnlyCell),
            BoardCell::Answer(current) => Ok(core::mem::replace(current, answer)),
        }
    }

    pub fn is_correct_at(&self, coords: Coord2) -> bool {
        match self.cell_at(coords) {
            BoardCell::Answer(answer) => answer.value() == Some(expected_product(coords)),
            BoardCell::Header(_) => false,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coord2> for Board {
    type Output = BoardCell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn headers_hold_row_and_column_multipliers() {
        let board = Board::new();

        assert_eq!(board[(0, 0)], BoardCell::Header(1));
        assert_eq!(board[(14, 0)], BoardCell::Header(15));
        assert_eq!(board[(0, 9)], BoardCell::Header(10));
        assert_eq!(board[(14, 9)], BoardCell::Header(150));
        assert!(board[(7, 4)].is_blank());
    }

    #[test]
    fn set_answer_overwrites_and_returns_previous() {
        let mut board = Board::new();

        let previous = board.set_answer((2, 3), "1").unwrap();
        assert!(previous.is_empty());

        let previous = board.set_answer((2, 3), "12").unwrap();
        assert_eq!(previous.as_str(), "1");
        assert!(board.is_correct_at((2, 3)));
    }

    #[test]
    fn invalid_input_leaves_cell_unchanged() {
        let mut board = Board::new();
        board.set_answer((1, 1), "4").unwrap();

        assert_eq!(board.set_answer((1, 1), "abcd"), Err(GameError::InvalidAnswer));
        assert_eq!(board.set_answer((1, 1), "1234"), Err(GameError::InvalidAnswer));
        assert_eq!(board[(1, 1)].to_string(), "4");
    }

    #[test]
    fn headers_and_out_of_bounds_are_rejected() {
        let mut board = Board::new();

        assert_eq!(board.set_answer((0, 0), "1"), Err(GameError::ReadOnlyCell));
        assert_eq!(board.set_answer((0, 9), "10"), Err(GameError::ReadOnlyCell));
        assert_eq!(board.set_answer((15, 1), "2"), Err(GameError::InvalidCoords));
        assert_eq!(board[(0, 0)], BoardCell::Header(1));
    }
}
