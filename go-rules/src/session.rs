use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::Point;
use crate::config::{BoardSize, GameConfig};
use crate::error::GoError;
use crate::goban::{Captures, Goban};
use crate::grid::Grid;
use crate::ko::Ko;
use crate::stone::{Cell, Stone};
use crate::territory::{self, GameScore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    NotStarted,
    InProgress,
    Ended,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::NotStarted => write!(f, "not_started"),
            Stage::InProgress => write!(f, "in_progress"),
            Stage::Ended => write!(f, "ended"),
        }
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(Stage::NotStarted),
            "in_progress" => Ok(Stage::InProgress),
            "ended" => Ok(Stage::Ended),
            _ => Err(format!("unknown stage: {s}")),
        }
    }
}

/// Board and capture tallies as they were before a move.
#[derive(Debug, Clone, PartialEq)]
struct Snapshot {
    grid: Grid,
    captures: Captures,
    last_move: Option<Point>,
}

/// Serializable view of a session, for front ends.
#[derive(Debug, Serialize, Deserialize)]
pub struct GameState {
    pub board: Vec<Cell>,
    pub size: BoardSize,
    pub captures: Captures,
    pub ko: Ko,
    pub to_play: Stone,
    pub stage: Stage,
    pub last_move: Option<Point>,
}

/// One game of Go: the position, whose turn it is, and the undo history.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    goban: Goban,
    to_play: Stone,
    stage: Stage,
    history: Vec<Snapshot>,
    last_move: Option<Point>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        GameSession {
            config,
            goban: Goban::new(config.board_size),
            to_play: Stone::Black,
            stage: Stage::NotStarted,
            history: Vec::new(),
            last_move: None,
        }
    }

    /// Create a session for a board side given as a number (9, 13 or 19).
    pub fn with_side(side: u8) -> Result<Self, GoError> {
        let size = BoardSize::try_from(side)?;
        Ok(Self::new(GameConfig::new(size)))
    }

    // -- Accessors --

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn size(&self) -> BoardSize {
        self.config.board_size
    }

    pub fn komi(&self) -> f64 {
        self.config.komi
    }

    pub fn goban(&self) -> &Goban {
        &self.goban
    }

    pub fn grid(&self) -> &Grid {
        self.goban.grid()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn current_player(&self) -> Stone {
        self.to_play
    }

    /// Contents of `(row, col)`. Panics when the point is off the board.
    pub fn cell_at(&self, point: Point) -> Cell {
        self.goban.grid().get(point)
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.goban.stone_at(point)
    }

    pub fn captures(&self) -> &Captures {
        self.goban.captures()
    }

    /// `(black, white)` capture tallies.
    pub fn capture_counts(&self) -> (u32, u32) {
        let captures = self.goban.captures();
        (captures.black, captures.white)
    }

    pub fn ko(&self) -> &Ko {
        self.goban.ko()
    }

    pub fn last_move(&self) -> Option<Point> {
        self.last_move
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // -- Stage transitions --

    pub fn start(&mut self) -> Result<(), GoError> {
        if self.stage != Stage::NotStarted {
            return Err(GoError::NotInProgress);
        }
        self.set_stage(Stage::InProgress);
        Ok(())
    }

    /// Mark the game finished. The engine never decides this on its own.
    pub fn end(&mut self) -> Result<(), GoError> {
        if self.stage != Stage::InProgress {
            return Err(GoError::NotInProgress);
        }
        self.set_stage(Stage::Ended);
        Ok(())
    }

    fn set_stage(&mut self, stage: Stage) {
        info!(from = %self.stage, to = %stage, "stage changed");
        self.stage = stage;
    }

    // -- Game actions --

    /// Play the current player's stone at `point`. Returns the number of
    /// stones captured. A rejected move changes nothing.
    pub fn play(&mut self, point: Point) -> Result<u32, GoError> {
        if self.stage != Stage::InProgress {
            return Err(GoError::NotInProgress);
        }

        let stone = self.to_play;
        let snapshot = Snapshot {
            grid: self.goban.grid().clone(),
            captures: *self.goban.captures(),
            last_move: self.last_move,
        };
        let captured = self.goban.play(point, stone)?;

        self.history.push(snapshot);
        self.last_move = Some(point);
        self.to_play = stone.opp();

        debug!(?point, %stone, captured, moves = self.history.len(), "move accepted");
        Ok(captured)
    }

    /// Take back the last accepted move. Ko memory stays as it is.
    pub fn undo(&mut self) -> Result<(), GoError> {
        if self.stage != Stage::InProgress {
            return Err(GoError::NotInProgress);
        }
        let snapshot = self.history.pop().ok_or(GoError::EmptyHistory)?;

        self.goban.restore(snapshot.grid, snapshot.captures);
        self.last_move = snapshot.last_move;
        self.to_play = self.to_play.opp();

        debug!(moves = self.history.len(), "move undone");
        Ok(())
    }

    /// Clear the board and history and begin a new game with the same config.
    pub fn restart(&mut self) {
        self.goban = Goban::new(self.config.board_size);
        self.to_play = Stone::Black;
        self.history.clear();
        self.last_move = None;
        debug!(size = %self.config.board_size, "game restarted");
        if self.stage != Stage::InProgress {
            self.set_stage(Stage::InProgress);
        }
    }

    /// Read-only legality probe for the current player.
    pub fn is_legal(&self, point: Point) -> bool {
        self.stage == Stage::InProgress && self.goban.is_legal(point, self.to_play)
    }

    // -- Scoring --

    /// Ownership of every cell as used by `score`.
    pub fn territory(&self) -> Vec<Cell> {
        territory::claim_territory(self.goban.grid())
    }

    pub fn game_score(&self) -> GameScore {
        territory::score(&self.goban, self.config.komi)
    }

    /// `(black, white)` scores.
    pub fn score(&self) -> (f64, f64) {
        self.game_score().totals()
    }

    // -- Serialization --

    pub fn game_state(&self) -> GameState {
        GameState {
            board: self.goban.grid().cells().to_vec(),
            size: self.config.board_size,
            captures: *self.goban.captures(),
            ko: self.goban.ko().clone(),
            to_play: self.to_play,
            stage: self.stage,
            last_move: self.last_move,
        }
    }
}
