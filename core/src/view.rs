use serde::{Deserialize, Serialize};

use crate::*;

/// Answer classification shown to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    Header,
    Empty,
    Correct,
    Incorrect,
}

/// Background of a cell, strongest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellFill {
    Celebration(Rgb),
    FactorHighlight,
    RowHighlight,
    Correct,
    Incorrect,
    Plain,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellBorder {
    FractionSelected,
    Selected,
    Plain,
}

/// Everything a renderer needs to draw one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub cell: BoardCell,
    pub status: CellStatus,
    pub fill: CellFill,
    pub border: CellBorder,
}

impl CellView {
    pub const fn is_read_only(&self) -> bool {
        self.cell.is_header()
    }
}

impl PlayEngine {
    pub fn cell_status_at(&self, coords: Coord2) -> CellStatus {
        match self.cell_at(coords) {
            BoardCell::Header(_) => CellStatus::Header,
            _ if self.is_correct_at(coords) => CellStatus::Correct,
            cell if cell.is_blank() => CellStatus::Empty,
            _ => CellStatus::Incorrect,
        }
    }

    pub fn cell_view(&self, coords: Coord2) -> CellView {
        let (row, col) = coords;
        let status = self.cell_status_at(coords);
        let modes = self.modes();

        let fill = if let Some(color) = self.celebration_color_at(coords) {
            CellFill::Celebration(color)
        } else if modes.is_highlighted(coords) {
            CellFill::FactorHighlight
        } else if col == 0 && modes.is_row_highlighted(row) {
            CellFill::RowHighlight
        } else {
            match status {
                CellStatus::Correct => CellFill::Correct,
                CellStatus::Incorrect => CellFill::Incorrect,
                CellStatus::Header | CellStatus::Empty => CellFill::Plain,
            }
        };

        let border = if modes.is_fraction_selected(coords) {
            CellBorder::FractionSelected
        } else if self.selection() == coords {
            CellBorder::Selected
        } else {
            CellBorder::Plain
        };

        CellView {
            cell: self.cell_at(coords),
            status,
            fill,
            border,
        }
    }
}
