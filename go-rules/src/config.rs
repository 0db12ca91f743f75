use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GoError;

pub const DEFAULT_KOMI: f64 = 5.5;

/// Supported board sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BoardSize {
    Nine,
    Thirteen,
    #[default]
    Nineteen,
}

impl BoardSize {
    pub fn side(self) -> u8 {
        match self {
            BoardSize::Nine => 9,
            BoardSize::Thirteen => 13,
            BoardSize::Nineteen => 19,
        }
    }

    pub fn area(self) -> usize {
        self.side() as usize * self.side() as usize
    }
}

impl TryFrom<u8> for BoardSize {
    type Error = GoError;

    fn try_from(side: u8) -> Result<Self, Self::Error> {
        match side {
            9 => Ok(BoardSize::Nine),
            13 => Ok(BoardSize::Thirteen),
            19 => Ok(BoardSize::Nineteen),
            n => Err(GoError::InvalidBoardSize(n)),
        }
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> Self {
        size.side()
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.side();
        write!(f, "{n}x{n}")
    }
}

/// Session parameters, fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: BoardSize,
    pub komi: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            komi: DEFAULT_KOMI,
        }
    }
}

impl GameConfig {
    pub fn new(board_size: BoardSize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    pub fn with_komi(mut self, komi: f64) -> Self {
        self.komi = komi;
        self
    }
}
