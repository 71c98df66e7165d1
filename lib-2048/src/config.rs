#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Tile value that wins the game.
    pub win_value: u32,
    /// Tiles placed on a fresh board.
    pub start_tiles: usize,
    /// Ignore moves once the game is won.
    pub freeze_on_win: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_value: 2048,
            start_tiles: 2,
            freeze_on_win: false,
        }
    }
}
