use rand::Rng;

use crate::{direction::Direction, mirror_board, transpose_board, transpose_rotate_board, Board};

const MOVE_FUNCTIONS: [fn(Board) -> (Board, u32); 4] = [move_up, move_down, move_right, move_left];

fn empty_slots(board: &Board) -> impl Iterator<Item = (usize, usize)> + '_ {
    board
        .cells()
        .filter(|&(_, _, cell)| cell == 0)
        .map(|(x, y, _)| (x, y))
}

/// Places a 2 (90%) or a 4 (10%) on an empty cell chosen uniformly at random. A full board is
/// returned as is.
pub fn spawn_square(rng: &mut impl Rng, board: Board) -> Board {
    let slot_count = core_2048::metrics::empty_count(&board);

    if slot_count > 0 {
        let rand = rng.gen_range(0..(slot_count * 10));

        let slot_idx = rand / 10;
        let cell = if rand % 10 == 0 { 2 } else { 1 };

        match empty_slots(&board).nth(slot_idx) {
            Some((x, y)) => board.with_exponent(x, y, cell),
            None => board,
        }
    } else {
        board
    }
}

fn move_up(board: Board) -> (Board, u32) {
    let (new_board, score) = transpose_board(board).collapse_left();

    (transpose_board(new_board), score)
}

fn move_down(board: Board) -> (Board, u32) {
    let (new_board, score) = transpose_rotate_board(board).collapse_left();

    (transpose_rotate_board(new_board), score)
}

fn move_right(board: Board) -> (Board, u32) {
    let (new_board, score) = mirror_board(board).collapse_left();

    (mirror_board(new_board), score)
}

fn move_left(board: Board) -> (Board, u32) {
    board.collapse_left()
}

/// Slides and merges every line towards `direction`. Returns the new board and the sum of the
/// merged tiles, whether or not anything moved.
pub fn apply_move(board: Board, direction: Direction) -> (Board, u32) {
    MOVE_FUNCTIONS[direction as usize](board)
}

/// Like [`apply_move`], but `None` when the board as a whole is left unchanged.
pub fn try_move(board: Board, direction: Direction) -> Option<(Board, u32)> {
    let (new_board, score) = apply_move(board, direction);

    (new_board != board).then_some((new_board, score))
}

/// [`try_move`] for every direction, indexed by `Direction as usize`.
pub fn try_all_moves(board: Board) -> [Option<(Board, u32)>; 4] {
    Direction::ALL.map(|direction| try_move(board, direction))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn board(rows: [[u32; 4]; 4]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn each_direction_packs_towards_its_edge() {
        let start = board([[2, 0, 2, 0], [0, 4, 0, 0], [0, 0, 0, 0], [2, 0, 0, 8]]);

        assert_eq!(
            apply_move(start, Direction::Left),
            (board([[4, 0, 0, 0], [4, 0, 0, 0], [0; 4], [2, 8, 0, 0]]), 4)
        );
        assert_eq!(
            apply_move(start, Direction::Right),
            (board([[0, 0, 0, 4], [0, 0, 0, 4], [0; 4], [0, 0, 2, 8]]), 4)
        );
        assert_eq!(
            apply_move(start, Direction::Up),
            (board([[4, 4, 2, 8], [0; 4], [0; 4], [0; 4]]), 4)
        );
        assert_eq!(
            apply_move(start, Direction::Down),
            (board([[0; 4], [0; 4], [0; 4], [4, 4, 2, 8]]), 4)
        );
    }

    #[test]
    fn right_merges_from_the_right_edge() {
        let start = board([[2, 2, 2, 0], [0; 4], [0; 4], [0; 4]]);

        assert_eq!(
            apply_move(start, Direction::Right),
            (board([[0, 0, 2, 4], [0; 4], [0; 4], [0; 4]]), 4)
        );
    }

    #[test]
    fn down_merges_from_the_bottom_edge() {
        let start = board([[0, 0, 0, 2], [0, 0, 0, 2], [0, 0, 0, 2], [0; 4]]);

        assert_eq!(
            apply_move(start, Direction::Down),
            (board([[0; 4], [0; 4], [0, 0, 0, 2], [0, 0, 0, 4]]), 4)
        );
    }

    #[test]
    fn blocked_direction_is_none() {
        let start = board([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);

        assert_eq!(try_move(start, Direction::Left), None);
        assert_eq!(try_move(start, Direction::Up), None);
        assert!(try_move(start, Direction::Right).is_some());
        assert!(try_move(start, Direction::Down).is_some());
        assert_eq!(try_all_moves(start).iter().flatten().count(), 2);
    }

    #[test]
    fn spawn_fills_every_empty_cell_without_overwriting() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let start = board([[64, 0, 0, 0], [0; 4], [0, 0, 128, 0], [0; 4]]);
        let mut board = start;

        for remaining in (0..14).rev() {
            board = spawn_square(&mut rng, board);
            assert_eq!(core_2048::metrics::empty_count(&board), remaining);
        }

        assert_eq!(board.value(0, 0), Some(64));
        assert_eq!(board.value(2, 2), Some(128));
        assert!(board
            .cells()
            .all(|(x, y, _)| matches!(board.value(x, y), Some(2 | 4 | 64 | 128))));
        assert_eq!(spawn_square(&mut rng, board), board);
    }
}
