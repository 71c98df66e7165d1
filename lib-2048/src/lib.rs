pub use core_2048::*;

pub mod ai;
pub mod config;
pub mod control_flow_helper;
pub mod direction;
pub mod game;
pub mod logic;
pub mod store;

pub use config::GameConfig;
pub use direction::Direction;
pub use game::{Game, MoveOutcome, MoveResult, Status};
pub use store::{FileStore, MemoryStore, ScoreStore, StoreError};
