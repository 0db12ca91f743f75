use arrayvec::ArrayVec;
use std::fmt;

use crate::Point;
use crate::config::BoardSize;
use crate::stone::{Cell, Stone};

/// Square board of cells stored as a flat row-major array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<Cell>,
    side: u8,
}

impl Grid {
    pub fn new(size: BoardSize) -> Self {
        Self::with_side(size.side())
    }

    /// Create an empty grid of any side. Sessions only use the standard sizes;
    /// smaller grids keep fixtures readable.
    pub fn with_side(side: u8) -> Self {
        Grid {
            cells: vec![Cell::Empty; side as usize * side as usize],
            side,
        }
    }

    /// Build a grid from an ASCII layout, one string per row.
    /// 'B' = Black, 'W' = White, anything else = Empty.
    pub fn from_layout(layout: &[&str]) -> Self {
        let side = layout.len();
        assert!(
            layout.iter().all(|row| row.chars().count() == side),
            "malformed layout: expected {side}x{side}"
        );

        Grid {
            cells: layout
                .iter()
                .flat_map(|row| row.chars().map(Cell::from_letter))
                .collect(),
            side: side as u8,
        }
    }

    // -- Accessors --

    pub fn side(&self) -> u8 {
        self.side
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    pub fn on_board(&self, (row, col): Point) -> bool {
        row < self.side && col < self.side
    }

    /// Cell contents. Panics when `point` is off the board.
    pub fn get(&self, point: Point) -> Cell {
        self.cells[self.idx(point)]
    }

    /// Panics when `point` is off the board.
    pub fn set(&mut self, point: Point, cell: Cell) {
        let i = self.idx(point);
        self.cells[i] = cell;
    }

    /// Stone at `point`, or None for empty and off-board points.
    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            self.get(point).stone()
        } else {
            None
        }
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let side = self.side;
        (0..side).flat_map(move |row| (0..side).map(move |col| (row, col)))
    }

    /// The 4-connected neighbors that are on the board: up, down, left, right.
    pub fn neighbors(&self, (row, col): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if row > 0 {
            result.push((row - 1, col));
        }
        if row + 1 < self.side {
            result.push((row + 1, col));
        }
        if col > 0 {
            result.push((row, col - 1));
        }
        if col + 1 < self.side {
            result.push((row, col + 1));
        }
        result
    }

    #[inline]
    pub(crate) fn idx(&self, (row, col): Point) -> usize {
        assert!(
            self.on_board((row, col)),
            "point ({row}, {col}) is off a {0}x{0} board",
            self.side
        );
        row as usize * self.side as usize + col as usize
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.side as usize) {
            let line: String = row.iter().map(|c| c.letter()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_empty_grid() {
        let grid = Grid::new(BoardSize::Nine);
        assert!(grid.is_empty());
        assert_eq!(grid.side(), 9);
        assert_eq!(grid.len(), 81);
    }

    #[test]
    #[should_panic(expected = "malformed")]
    fn rejects_malformed_layout() {
        Grid::from_layout(&["++", "+"]);
    }

    #[test]
    fn layout_is_row_major() {
        let grid = Grid::from_layout(&["B++", "+W+", "+++"]);
        assert_eq!(grid.get((0, 0)), Cell::Black);
        assert_eq!(grid.get((1, 1)), Cell::White);
        assert_eq!(grid.cells()[4], Cell::White);
        assert_eq!(grid.count(Cell::Empty), 7);
    }

    #[test]
    fn set_and_get() {
        let mut grid = Grid::with_side(4);
        grid.set((2, 3), Cell::White);
        assert_eq!(grid.get((2, 3)), Cell::White);
        assert_eq!(grid.stone_at((2, 3)), Some(Stone::White));
        grid.set((2, 3), Cell::Empty);
        assert!(grid.is_empty());
    }

    #[test]
    #[should_panic(expected = "off a 4x4 board")]
    fn get_off_board_panics() {
        Grid::with_side(4).get((4, 0));
    }

    #[test]
    fn stone_at_off_board_is_none() {
        let grid = Grid::from_layout(&["BB", "BB"]);
        assert_eq!(grid.stone_at((2, 0)), None);
        assert_eq!(grid.stone_at((0, 255)), None);
    }

    #[test]
    fn on_board_check() {
        let grid = Grid::with_side(4);
        assert!(grid.on_board((0, 0)));
        assert!(grid.on_board((3, 3)));
        assert!(!grid.on_board((4, 0)));
        assert!(!grid.on_board((0, 4)));
    }

    #[test]
    fn neighbors_respect_edges() {
        let grid = Grid::with_side(4);
        assert_eq!(grid.neighbors((0, 0)).as_slice(), &[(1, 0), (0, 1)]);
        assert_eq!(grid.neighbors((3, 3)).as_slice(), &[(2, 3), (3, 2)]);
        assert_eq!(
            grid.neighbors((1, 2)).as_slice(),
            &[(0, 2), (2, 2), (1, 1), (1, 3)]
        );
    }

    #[test]
    fn points_in_scan_order() {
        let grid = Grid::with_side(2);
        let points: Vec<Point> = grid.points().collect();
        assert_eq!(points, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn displays_layout() {
        let layout = ["B+W", "+++", "WWB"];
        let grid = Grid::from_layout(&layout);
        assert_eq!(grid.to_string(), "B+W\n+++\nWWB\n");
    }
}
