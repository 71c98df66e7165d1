use crate::{Row, MAX_EXPONENT, SIZE};

/// Slides a row towards index 0, merging equal neighbours once, and returns the new row along
/// with the value of every tile produced by a merge.
///
/// Merging is a single greedy pass over the non-empty tiles: a tile equal to the one after it
/// absorbs it, and the tile after that starts a fresh comparison. `[2, 2, 2, 2]` becomes
/// `[4, 4]`, and `[2, 2, 2]` becomes `[4, 2]`.
pub fn collapse_row(row: Row) -> (Row, u32) {
    let mut tiles = row.into_iter().filter(|&cell| cell != 0).peekable();

    let mut new_row = [0; SIZE];
    let mut score = 0;

    for slot in new_row.iter_mut() {
        let Some(cell) = tiles.next() else {
            break;
        };

        // A maxed out tile cannot double without overflowing.
        if cell < MAX_EXPONENT && tiles.next_if_eq(&cell).is_some() {
            *slot = cell + 1;
            score += 1 << (cell + 1);
        } else {
            *slot = cell;
        }
    }

    (new_row, score)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn collapse_values(values: [u32; SIZE]) -> ([u32; SIZE], u32) {
        let row = values.map(|value| crate::value_to_exponent(value).unwrap());
        let (row, score) = collapse_row(row);

        (row.map(|cell| crate::exponent_to_value(cell).unwrap_or(0)), score)
    }

    #[test]
    fn four_equal_tiles_merge_pairwise() {
        assert_eq!(collapse_values([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
    }

    #[test]
    fn merged_tile_does_not_merge_again() {
        assert_eq!(collapse_values([2, 2, 2, 0]), ([4, 2, 0, 0], 4));
        assert_eq!(collapse_values([4, 2, 2, 0]), ([4, 4, 0, 0], 4));
    }

    #[test]
    fn gaps_are_removed_before_merging() {
        assert_eq!(collapse_values([2, 0, 0, 2]), ([4, 0, 0, 0], 4));
        assert_eq!(collapse_values([0, 8, 0, 4]), ([8, 4, 0, 0], 0));
    }

    #[test]
    fn first_pair_wins() {
        assert_eq!(collapse_values([8, 8, 8, 16]), ([16, 8, 16, 0], 16));
        assert_eq!(collapse_values([2, 4, 4, 2]), ([2, 8, 2, 0], 8));
    }

    #[test]
    fn packed_row_without_pairs_is_unchanged() {
        assert_eq!(collapse_values([2, 4, 8, 16]), ([2, 4, 8, 16], 0));
        assert_eq!(collapse_values([0; SIZE]), ([0; SIZE], 0));
    }

    #[test]
    fn maxed_tiles_stay_apart() {
        let row = [MAX_EXPONENT, MAX_EXPONENT, 0, 0];

        assert_eq!(collapse_row(row), (row, 0));
    }
}
