use log::{debug, info, warn};
use rand::Rng;

use crate::{
    config::GameConfig,
    direction::Direction,
    logic, metrics,
    store::ScoreStore,
    Board,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    Playing,
    /// The win tile has been reached. Play may go on; only a restart clears it.
    Won,
    /// No empty cell and no merge left.
    GameOver,
}

/// Status of a board, checked in order: win tile present, empty cell left, merge left.
///
/// A board holding the win tile is `Won` even when nothing can move.
pub fn check_status(board: &Board, win_value: u32) -> Status {
    if metrics::any_cell_equals(board, win_value) {
        Status::Won
    } else if metrics::has_empty_cell(board) || metrics::has_available_merge(board) {
        Status::Playing
    } else {
        Status::GameOver
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub changed: bool,
    pub score_delta: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub changed: bool,
    pub score_delta: u32,
    pub status: Status,
}

pub struct Game<R, S> {
    board: Board,
    score: u32,
    best_score: u32,
    status: Status,
    config: GameConfig,
    rng: R,
    store: S,
}

impl<R, S> Game<R, S>
where
    R: Rng,
    S: ScoreStore,
{
    /// Starts a game on a freshly seeded board.
    pub fn new(rng: R, store: S, config: GameConfig) -> Self {
        let mut game = Self::with_board(Board::EMPTY, rng, store, config);
        game.seed_board();

        game
    }

    /// Starts a game from `board` with a zero score. The status is left as `Playing`.
    pub fn with_board(board: Board, rng: R, store: S, config: GameConfig) -> Self {
        let best_score = match store.load() {
            Ok(best_score) => best_score.unwrap_or(0),
            Err(err) => {
                warn!("could not load best score, starting from 0: {err}");
                0
            }
        };

        Self {
            board,
            score: 0,
            best_score,
            status: Status::Playing,
            config,
            rng,
            store,
        }
    }

    fn seed_board(&mut self) {
        for _ in 0..self.config.start_tiles {
            self.spawn_random_tile();
        }
    }

    pub const fn board(&self) -> &Board {
        &self.board
    }

    pub const fn score(&self) -> u32 {
        self.score
    }

    pub const fn best_score(&self) -> u32 {
        self.best_score
    }

    pub const fn status(&self) -> Status {
        self.status
    }

    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether `step` would act on input right now.
    pub const fn accepts_moves(&self) -> bool {
        match self.status {
            Status::Playing => true,
            Status::Won => !self.config.freeze_on_win,
            Status::GameOver => false,
        }
    }

    pub fn has_empty_cell(&self) -> bool {
        metrics::has_empty_cell(&self.board)
    }

    pub fn any_cell_equals(&self, value: u32) -> bool {
        metrics::any_cell_equals(&self.board, value)
    }

    pub fn has_available_merge(&self) -> bool {
        metrics::has_available_merge(&self.board)
    }

    /// Slides the board without spawning. The score grows by the merged tiles even when the
    /// board as a whole ends up unchanged.
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        let (new_board, score_delta) = logic::apply_move(self.board, direction);
        let changed = new_board != self.board;

        self.board = new_board;
        self.add_score(score_delta);

        MoveResult {
            changed,
            score_delta,
        }
    }

    /// Places one new tile on an empty cell. Does nothing on a full board.
    pub fn spawn_random_tile(&mut self) {
        self.board = logic::spawn_square(&mut self.rng, self.board);
    }

    /// One full turn: move, then spawn and re-check the status if the board changed.
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        if !self.accepts_moves() {
            return MoveOutcome {
                changed: false,
                score_delta: 0,
                status: self.status,
            };
        }

        let MoveResult {
            changed,
            score_delta,
        } = self.apply_move(direction);

        debug!("{direction:?}: changed {changed}, +{score_delta}");

        if changed {
            self.spawn_random_tile();
            self.update_status();
        }

        MoveOutcome {
            changed,
            score_delta,
            status: self.status,
        }
    }

    /// Fresh seeded board, zero score. The best score survives.
    pub fn restart(&mut self) {
        self.board = Board::EMPTY;
        self.score = 0;
        self.status = Status::Playing;
        self.seed_board();
    }

    fn update_status(&mut self) {
        let status = match check_status(&self.board, self.config.win_value) {
            // Only a restart clears a win, even once the win tile has merged away.
            Status::Playing if self.status == Status::Won => Status::Won,
            status => status,
        };

        if status != self.status {
            match status {
                Status::Won => info!("reached {} with score {}", self.config.win_value, self.score),
                Status::GameOver => info!("game over with score {}", self.score),
                Status::Playing => {}
            }
        }

        self.status = status;
    }

    fn add_score(&mut self, score_delta: u32) {
        if score_delta == 0 {
            return;
        }

        self.score += score_delta;

        if self.score > self.best_score {
            self.best_score = self.score;

            if let Err(err) = self.store.save(self.best_score) {
                warn!("could not save best score {}: {err}", self.best_score);
            }
        }
    }
}
