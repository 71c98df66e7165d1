use crate::{value_to_exponent, Board, SIZE};

pub fn empty_count(board: &Board) -> usize {
    board.cells().filter(|&(_, _, cell)| cell == 0).count()
}

pub fn has_empty_cell(board: &Board) -> bool {
    board.cells().any(|(_, _, cell)| cell == 0)
}

/// Whether any tile holds exactly `value`. Values that cannot be tiles never match.
pub fn any_cell_equals(board: &Board, value: u32) -> bool {
    match value_to_exponent(value) {
        Ok(0) | Err(_) => false,
        Ok(exponent) => board.cells().any(|(_, _, cell)| cell == exponent),
    }
}

/// Whether some tile equals its right or lower neighbour.
///
/// Only those two neighbours are compared from each cell; every adjacent pair is still covered
/// once. Empty cells compare equal to each other, so callers check for empty cells first.
pub fn has_available_merge(board: &Board) -> bool {
    board.cells().any(|(x, y, cell)| {
        let right = y < SIZE - 1 && cell == board.exponent(x, y + 1);
        let below = x < SIZE - 1 && cell == board.exponent(x + 1, y);

        right || below
    })
}

pub fn max_tile(board: &Board) -> Option<u32> {
    board
        .cells()
        .map(|(_, _, cell)| cell)
        .max()
        .and_then(crate::exponent_to_value)
}

/// Sum of all tile values. Merging never changes it; spawning raises it by the spawned tile.
pub fn tile_sum(board: &Board) -> u64 {
    board
        .cells()
        .filter_map(|(x, y, _)| board.value(x, y))
        .map(u64::from)
        .sum()
}
