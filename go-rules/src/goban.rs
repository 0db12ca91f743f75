use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::Point;
use crate::config::BoardSize;
use crate::error::GoError;
use crate::grid::Grid;
use crate::ko::Ko;
use crate::stone::{Cell, Stone};

/// Captures indexed by the capturing color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// Board position plus the per-color bookkeeping that move legality needs:
/// capture tallies and ko memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Goban {
    grid: Grid,
    captures: Captures,
    ko: Ko,
}

impl Goban {
    pub fn new(size: BoardSize) -> Self {
        Self::from_grid(Grid::new(size))
    }

    /// Wrap an existing grid with zeroed captures and empty ko memory.
    pub fn from_grid(grid: Grid) -> Self {
        Goban {
            grid,
            captures: Captures::new(),
            ko: Ko::new(),
        }
    }

    // -- Accessors --

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn ko(&self) -> &Ko {
        &self.ko
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.grid.stone_at(point)
    }

    /// Put back a board and capture tallies taken earlier. Ko memory is kept.
    pub(crate) fn restore(&mut self, grid: Grid, captures: Captures) {
        self.grid = grid;
        self.captures = captures;
    }

    // -- Legality --

    pub fn is_ko_violation(&self, point: Point, stone: Stone) -> bool {
        self.ko.is_violation(point, stone)
    }

    /// Would `stone` at `point` leave its own chain without liberties while
    /// capturing nothing? Probes a scratch copy; `self` is never touched.
    pub fn is_suicide(&self, point: Point, stone: Stone) -> bool {
        let mut scratch = self.clone();
        scratch.grid.set(point, stone.into());
        if scratch.grid.has_liberty(point) {
            return false;
        }
        scratch.capture_stones_adjacent_to(point) == 0
    }

    /// Check a move without applying it.
    pub fn check(&self, point: Point, stone: Stone) -> Result<(), GoError> {
        if !self.grid.on_board(point) {
            return Err(GoError::NotOnBoard);
        }
        if self.stone_at(point).is_some() {
            return Err(GoError::Occupied);
        }
        if self.is_ko_violation(point, stone) {
            return Err(GoError::KoViolation);
        }
        if self.is_suicide(point, stone) {
            return Err(GoError::Suicide);
        }
        Ok(())
    }

    pub fn is_legal(&self, point: Point, stone: Stone) -> bool {
        self.check(point, stone).is_ok()
    }

    // -- Game actions --

    /// Place a stone, resolve captures and credit them to the mover.
    /// Returns the number of stones captured. On error nothing changes.
    pub fn play(&mut self, point: Point, stone: Stone) -> Result<u32, GoError> {
        if let Err(e) = self.check(point, stone) {
            trace!(?point, %stone, error = %e, "move rejected");
            return Err(e);
        }

        self.grid.set(point, stone.into());
        self.ko.record_placement(stone, point);

        let captured = self.capture_stones_adjacent_to(point);
        self.captures.add(stone, captured);

        Ok(captured)
    }

    /// Remove every opposing chain next to `point` that has no liberty left.
    /// Returns the number of stones removed.
    pub(crate) fn capture_stones_adjacent_to(&mut self, point: Point) -> u32 {
        let Some(stone) = self.stone_at(point) else {
            return 0;
        };
        let opponent = stone.opp();

        let mut removed = 0;
        for n in self.grid.neighbors(point) {
            // A chain touching the new stone twice is gone after the first visit.
            if self.stone_at(n) == Some(opponent) && !self.grid.has_liberty(n) {
                removed += self.remove_group(n, stone);
            }
        }

        if removed > 0 {
            debug!(?point, %stone, removed, "captured stones");
        }
        removed
    }

    /// Clear the chain at `point` in work-stack order. Every pop is written to
    /// the capturer's ko memory, duplicates included, so the last entry popped
    /// is what remains.
    pub(crate) fn remove_group(&mut self, point: Point, capturer: Stone) -> u32 {
        let Some(color) = self.stone_at(point) else {
            return 0;
        };

        let mut removed = 0;
        let mut stack = vec![point];
        while let Some(p) = stack.pop() {
            if !self.grid.get(p).is_empty() {
                removed += 1;
            }
            self.grid.set(p, Cell::Empty);
            self.ko.record_capture(capturer, p);
            for n in self.grid.neighbors(p) {
                if self.stone_at(n) == Some(color) {
                    stack.push(n);
                }
            }
        }
        removed
    }
}
