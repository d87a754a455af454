use serde::{Deserialize, Serialize};

use crate::*;

/// Keys intercepted by the grid; everything else is left to text editing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavKey {
    Right,
    Tab,
    Left,
    Down,
    Up,
    Enter,
}

impl NavKey {
    /// Maps a DOM `KeyboardEvent.key` name.
    pub fn from_key_name(name: &str) -> Option<Self> {
        use NavKey::*;
        Some(match name {
            "ArrowRight" => Right,
            "Tab" => Tab,
            "ArrowLeft" => Left,
            "ArrowDown" => Down,
            "ArrowUp" => Up,
            "Enter" => Enter,
            _ => return None,
        })
    }

    /// Right and Tab share the same forward movement.
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::Right | Self::Tab)
    }
}

/// Where the next row starts when a move wraps, skipping the row label.
const WRAP_COL: Coord = 1;

/// Columns from which Enter wraps to the next row.
const ENTER_COLS: [Coord; 2] = [COLS - 2, COLS - 1];

/// Moves a single selection one step; out-of-range moves stay put.
pub fn step((row, col): Coord2, key: NavKey) -> Coord2 {
    use NavKey::*;

    let last_row = ROWS - 1;
    let last_col = COLS - 1;

    match key {
        Right | Tab if col < last_col => (row, col + 1),
        Right | Tab if row < last_row => (row + 1, WRAP_COL),
        Left if col > 0 => (row, col - 1),
        Down if row < last_row => (row + 1, col),
        Up if row > 0 => (row - 1, col),
        Enter if ENTER_COLS.contains(&col) && row < last_row => (row + 1, WRAP_COL),
        _ => (row, col),
    }
}

/// Shifts every fraction cell one column, keyed on the first cell's column.
///
/// Returns `None` when the key does not shift or the shift would leave the grid.
pub fn shift_columns(cells: &[Coord2], key: NavKey) -> Option<impl Iterator<Item = Coord2> + '_> {
    let &(_, first_col) = cells.first()?;

    let next_col = move |col: Coord| -> Coord {
        if key.is_forward() { col + 1 } else { col.saturating_sub(1) }
    };

    let can_move = match key {
        key if key.is_forward() => first_col < COLS - 1,
        NavKey::Left => first_col > 0,
        _ => false,
    };

    can_move.then(|| cells.iter().map(move |&(row, col)| (row, next_col(col))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn right_and_tab_wrap_past_the_row_label() {
        assert_eq!(step((0, 9), NavKey::Right), (1, 1));
        assert_eq!(step((0, 9), NavKey::Tab), (1, 1));
        assert_eq!(step((0, 4), NavKey::Tab), (0, 5));
    }

    #[test]
    fn right_at_the_last_cell_is_a_no_op() {
        assert_eq!(step((14, 9), NavKey::Right), (14, 9));
        assert_eq!(step((14, 9), NavKey::Tab), (14, 9));
    }

    #[test]
    fn left_up_down_stop_at_the_edges() {
        assert_eq!(step((3, 1), NavKey::Left), (3, 0));
        assert_eq!(step((3, 0), NavKey::Left), (3, 0));
        assert_eq!(step((0, 4), NavKey::Up), (0, 4));
        assert_eq!(step((14, 4), NavKey::Down), (14, 4));
        assert_eq!(step((5, 4), NavKey::Down), (6, 4));
        assert_eq!(step((5, 4), NavKey::Up), (4, 4));
    }

    #[test]
    fn enter_only_wraps_from_the_last_two_columns() {
        assert_eq!(step((2, 8), NavKey::Enter), (3, 1));
        assert_eq!(step((2, 9), NavKey::Enter), (3, 1));
        assert_eq!(step((2, 7), NavKey::Enter), (2, 7));
        assert_eq!(step((14, 8), NavKey::Enter), (14, 8));
    }

    #[test]
    fn key_names_follow_dom_conventions() {
        assert_eq!(NavKey::from_key_name("ArrowRight"), Some(NavKey::Right));
        assert_eq!(NavKey::from_key_name("Enter"), Some(NavKey::Enter));
        assert_eq!(NavKey::from_key_name("a"), None);
        assert_eq!(NavKey::from_key_name("Backspace"), None);
    }

    #[test]
    fn fraction_pair_moves_together_within_bounds() {
        let pair = [(2, 3), (5, 3)];

        let moved: Vec<_> = shift_columns(&pair, NavKey::Tab).unwrap().collect();
        assert_eq!(moved, [(2, 4), (5, 4)]);

        let moved: Vec<_> = shift_columns(&pair, NavKey::Left).unwrap().collect();
        assert_eq!(moved, [(2, 2), (5, 2)]);

        assert!(shift_columns(&[(2, 9), (5, 9)], NavKey::Right).is_none());
        assert!(shift_columns(&[(2, 0), (5, 0)], NavKey::Left).is_none());
        assert!(shift_columns(&pair, NavKey::Down).is_none());
    }
}
