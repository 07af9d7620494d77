use crate::connectivity::Region;
use crate::types::{Swap, Tile, BOARD_SIZE};

/// Read-only copy of everything a front end needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Tile; BOARD_SIZE]; BOARD_SIZE],
    pub score: u32,
    pub moves_left: u32,
    pub game_over: bool,
    pub seed: u32,
    /// First swap that would match, if any
    pub hint: Option<Swap>,
    pub largest_region: Option<Region>,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Tile::Empty; BOARD_SIZE]; BOARD_SIZE],
            score: 0,
            moves_left: 0,
            game_over: false,
            seed: 0,
            hint: None,
            largest_region: None,
        }
    }
}
