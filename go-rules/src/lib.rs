pub mod chain;
pub mod config;
pub mod error;
pub mod goban;
pub mod grid;
pub mod ko;
pub mod session;
pub mod stone;
pub mod territory;

/// A board coordinate as `(row, col)`.
pub type Point = (u8, u8);

pub use config::{BoardSize, DEFAULT_KOMI, GameConfig};
pub use error::GoError;
pub use goban::{Captures, Goban};
pub use grid::Grid;
pub use ko::Ko;
pub use session::{GameSession, GameState, Stage};
pub use stone::{Cell, Stone};
pub use territory::GameScore;
