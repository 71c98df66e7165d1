pub mod line;
pub mod metrics;

use std::fmt;

/// Side length of the board.
pub const SIZE: usize = 4;

/// One row of the board, stored as tile exponents. `0` is an empty cell and `e` is the tile `2^e`.
pub type Row = [u8; SIZE];

/// Largest exponent a cell can hold without overflowing a `u32` tile value.
pub const MAX_EXPONENT: u8 = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TileError {
    #[error("tile value {0} is not a power of two greater than one")]
    NotPowerOfTwo(u32),
    #[error("tile exponent {0} does not fit a u32 tile value")]
    ExponentTooLarge(u8),
}

/// A `SIZE` x `SIZE` grid. Row index `x` runs top to bottom, column index `y` left to right.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Row; SIZE],
}

pub const fn exponent_to_value(exponent: u8) -> Option<u32> {
    if exponent == 0 {
        None
    } else {
        Some(1 << exponent)
    }
}

pub fn value_to_exponent(value: u32) -> Result<u8, TileError> {
    match value {
        0 => Ok(0),
        1 => Err(TileError::NotPowerOfTwo(value)),
        _ if value.is_power_of_two() => Ok(value.trailing_zeros() as u8),
        _ => Err(TileError::NotPowerOfTwo(value)),
    }
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [[0; SIZE]; SIZE],
    };

    /// Builds a board from tile exponents, with `0` standing for an empty cell.
    pub fn from_exponents(cells: [Row; SIZE]) -> Result<Self, TileError> {
        match cells.iter().flatten().find(|&&cell| cell > MAX_EXPONENT) {
            Some(&cell) => Err(TileError::ExponentTooLarge(cell)),
            None => Ok(Self { cells }),
        }
    }

    /// Builds a board from tile values, with `0` standing for an empty cell.
    pub fn from_rows(rows: [[u32; SIZE]; SIZE]) -> Result<Self, TileError> {
        let mut board = Self::EMPTY;

        for (x, row) in rows.into_iter().enumerate() {
            for (y, value) in row.into_iter().enumerate() {
                board.cells[x][y] = value_to_exponent(value)?;
            }
        }

        Ok(board)
    }

    pub const fn exponents(&self) -> [Row; SIZE] {
        self.cells
    }

    pub const fn exponent(&self, x: usize, y: usize) -> u8 {
        self.cells[x][y]
    }

    pub const fn value(&self, x: usize, y: usize) -> Option<u32> {
        exponent_to_value(self.cells[x][y])
    }

    pub fn set_value(&mut self, x: usize, y: usize, value: u32) -> Result<(), TileError> {
        self.cells[x][y] = value_to_exponent(value)?;
        Ok(())
    }

    pub fn rows(&self) -> [[Option<u32>; SIZE]; SIZE] {
        self.cells.map(|row| row.map(exponent_to_value))
    }

    /// Every cell as `(x, y, exponent)`, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, row)| {
            row.iter()
                .enumerate()
                .map(move |(y, &exponent)| (x, y, exponent))
        })
    }

    /// Returns a copy with a tile of `2^exponent` placed at `(x, y)`.
    ///
    /// Panics if `exponent` is above `MAX_EXPONENT`.
    pub const fn with_exponent(mut self, x: usize, y: usize, exponent: u8) -> Self {
        assert!(exponent <= MAX_EXPONENT, "tile exponent out of range");
        self.cells[x][y] = exponent;
        self
    }

    /// Collapses every row towards column 0, returning the new board and the merged score.
    pub fn collapse_left(&self) -> (Self, u32) {
        let mut score = 0;
        let cells = self.cells.map(|row| {
            let (row, row_score) = line::collapse_row(row);
            score += row_score;
            row
        });

        (Self { cells }, score)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                match cell {
                    Some(value) => write!(f, "{value:>6}")?,
                    None => write!(f, "{:>6}", ".")?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Reverses every row.
pub const fn mirror_board(board: Board) -> Board {
    let mut cells = [[0; SIZE]; SIZE];
    let mut x = 0;

    while x < SIZE {
        let mut y = 0;
        while y < SIZE {
            cells[x][y] = board.cells[x][SIZE - 1 - y];
            y += 1;
        }
        x += 1;
    }

    Board { cells }
}

/// Swaps rows and columns across the main diagonal.
pub const fn transpose_board(board: Board) -> Board {
    let mut cells = [[0; SIZE]; SIZE];
    let mut x = 0;

    while x < SIZE {
        let mut y = 0;
        while y < SIZE {
            cells[x][y] = board.cells[y][x];
            y += 1;
        }
        x += 1;
    }

    Board { cells }
}

/// Swaps rows and columns across the anti-diagonal, so row `i` is column `SIZE - 1 - i` read
/// bottom to top.
pub const fn transpose_rotate_board(board: Board) -> Board {
    let mut cells = [[0; SIZE]; SIZE];
    let mut x = 0;

    while x < SIZE {
        let mut y = 0;
        while y < SIZE {
            cells[x][y] = board.cells[SIZE - 1 - y][SIZE - 1 - x];
            y += 1;
        }
        x += 1;
    }

    Board { cells }
}
