use std::ops::ControlFlow;

use rand::Rng;

use crate::{
    control_flow_helper,
    direction::Direction,
    game::{Game, Status},
    logic,
    store::ScoreStore,
    Board,
};

pub mod random;

/// Picks moves for a game.
pub trait Ai {
    fn get_next_move(&mut self, board: &Board) -> Option<Direction>;
}

/// Moves that change `board`, with the board each one leads to before spawning.
fn get_all_moves(board: Board) -> impl Iterator<Item = (Board, Direction)> {
    Direction::iter().filter_map(move |direction| {
        logic::try_move(board, direction).map(|(new_board, _)| (new_board, direction))
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayReport {
    pub steps: u32,
    pub score: u32,
    pub status: Status,
}

/// Lets `ai` play until it runs out of moves, the game stops accepting them, or `max_steps` turns
/// have been played.
pub fn play_to_end<R, S>(game: &mut Game<R, S>, ai: &mut impl Ai, max_steps: u32) -> PlayReport
where
    R: Rng,
    S: ScoreStore,
{
    let steps = control_flow_helper::loop_try_fold(0, |steps| {
        if steps >= max_steps || !game.accepts_moves() {
            return ControlFlow::Break(steps);
        }

        match ai.get_next_move(game.board()) {
            Some(direction) => {
                game.step(direction);
                ControlFlow::Continue(steps + 1)
            }
            None => ControlFlow::Break(steps),
        }
    });

    PlayReport {
        steps,
        score: game.score(),
        status: game.status(),
    }
}
