use alloc::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Learning aid toggled by the two mode buttons.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearningMode {
    /// Highlights the two factors of a product.
    Division,
    /// Pairs two cells of one column to compare fractions over that column.
    Fraction,
}

pub type CellPair = SmallVec<[Coord2; 2]>;

/// Active mode with its transient highlights.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeState {
    active: Option<LearningMode>,
    highlighted_cells: CellPair,
    highlighted_rows: BTreeSet<Coord>,
    fraction_cells: CellPair,
}

impl ModeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<LearningMode> {
        self.active
    }

    pub fn highlighted_cells(&self) -> &[Coord2] {
        &self.highlighted_cells
    }

    pub fn highlighted_rows(&self) -> &BTreeSet<Coord> {
        &self.highlighted_rows
    }

    pub fn fraction_cells(&self) -> &[Coord2] {
        &self.fraction_cells
    }

    pub fn is_highlighted(&self, coords: Coord2) -> bool {
        self.highlighted_cells.contains(&coords)
    }

    pub fn is_row_highlighted(&self, row: Coord) -> bool {
        self.highlighted_rows.contains(&row)
    }

    pub fn is_fraction_selected(&self, coords: Coord2) -> bool {
        self.fraction_cells.contains(&coords)
    }

    /// True while Fraction mode holds a full pair.
    pub fn has_fraction_pair(&self) -> bool {
        self.active == Some(LearningMode::Fraction) && self.fraction_cells.len() == 2
    }

    /// Switches to `mode`, or back to no mode when it is already active.
    pub fn toggle(&mut self, mode: LearningMode) -> Option<LearningMode> {
        self.active = if self.active == Some(mode) {
            None
        } else {
            Some(mode)
        };
        self.highlighted_cells.clear();
        self.highlighted_rows.clear();
        self.fraction_cells.clear();
        self.active
    }

    /// Applies the active mode's double-activation behavior to `coords`.
    pub fn activate(&mut self, coords: Coord2) {
        let (row, col) = coords;

        match self.active {
            None => {}
            Some(LearningMode::Division) => {
                self.highlighted_cells = smallvec::smallvec![(row, 0), (0, col)];
            }
            Some(LearningMode::Fraction) => match self.fraction_cells.as_slice() {
                [] => {
                    self.fraction_cells.push(coords);
                    self.highlighted_rows.insert(row);
                }
                [(_, pending_col)] if *pending_col == col => {
                    self.fraction_cells.push(coords);
                    self.highlighted_rows.insert(row);
                }
                _ => {
                    self.fraction_cells.clear();
                    self.fraction_cells.push(coords);
                    self.highlighted_rows.clear();
                    self.highlighted_rows.insert(row);
                }
            },
        }
    }

    /// Moves the fraction pair one column; false when nothing moved.
    pub fn shift_fraction_pair(&mut self, key: NavKey) -> bool {
        let Some(shifted) = shift_columns(&self.fraction_cells, key) else {
            return false;
        };
        let shifted: CellPair = shifted.collect();
        self.fraction_cells = shifted;
        true
    }
}
