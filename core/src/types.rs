/// Single coordinate axis used for row and column indices.
pub type Coord = u8;

/// Count type used for cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Rows in the times table, one per multiplier `1..=ROWS`.
pub const ROWS: Coord = 15;

/// Columns including both header columns.
pub const COLS: Coord = 10;

/// Board size as `(rows, cols)`.
pub const SIZE: Coord2 = (ROWS, COLS);

/// Number of fillable cells, everything except the two header columns.
pub const INTERIOR_CELLS: CellCount = mult(ROWS, COLS - 2);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub const fn in_bounds((row, col): Coord2) -> bool {
    row < ROWS && col < COLS
}

/// Header cells are the first and the last column.
pub const fn is_header((_, col): Coord2) -> bool {
    col == 0 || col == COLS - 1
}

pub const fn is_interior(coords: Coord2) -> bool {
    in_bounds(coords) && !is_header(coords)
}

/// Product a correct answer must match, `(row + 1) * (col + 1)`.
pub const fn expected_product((row, col): Coord2) -> u16 {
    (row as u16 + 1) * (col as u16 + 1)
}

/// Iterates all board coordinates in row-major order.
pub fn iter_coords() -> impl Iterator<Item = Coord2> {
    (0..ROWS).flat_map(|row| (0..COLS).map(move |col| (row, col)))
}

/// Iterates the fillable coordinates in row-major order.
pub fn iter_interior() -> impl Iterator<Item = Coord2> {
    iter_coords().filter(|&coords| !is_header(coords))
}
