use rand::{seq::IteratorRandom, Rng};

use crate::{direction::Direction, Board};

use super::Ai;

/// Plays a uniformly random move among those that change the board.
pub struct RandomAi<R> {
    rng: R,
}

impl<R> Ai for RandomAi<R>
where
    R: Rng,
{
    fn get_next_move(&mut self, board: &Board) -> Option<Direction> {
        super::get_all_moves(*board)
            .map(|(_, direction)| direction)
            .choose(&mut self.rng)
    }
}

impl<R> RandomAi<R>
where
    R: Rng,
{
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}
