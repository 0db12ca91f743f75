//! Territory assignment and scoring.
//!
//! Territory is handed out greedily: stones are visited in row-major order and
//! each unclaimed stone floods the empty cells it can reach. The first stone
//! to reach a region owns all of it, even when the region also borders the
//! other color. Results therefore depend on scan order and will not match
//! conventional area or territory counting on contested boards.

use serde::Serialize;

use crate::goban::Goban;
use crate::grid::Grid;
use crate::stone::{Cell, Stone};

/// Assign every reachable cell to a color.
///
/// Returns a flat array (same layout as `grid.cells()`) where a stone's cell
/// carries its own color, flooded empty cells carry the color of the stone
/// that reached them first, and `Cell::Empty` marks regions no stone touches.
pub fn claim_territory(grid: &Grid) -> Vec<Cell> {
    let mut ownership = vec![Cell::Empty; grid.len()];

    for seed in grid.points() {
        let Some(stone) = grid.stone_at(seed) else {
            continue;
        };
        if !ownership[grid.idx(seed)].is_empty() {
            continue;
        }

        let owner = Cell::from(stone);
        ownership[grid.idx(seed)] = owner;
        let mut stack = vec![seed];

        while let Some(p) = stack.pop() {
            for n in grid.neighbors(p) {
                let ni = grid.idx(n);
                if grid.get(n).is_empty() && ownership[ni].is_empty() {
                    ownership[ni] = owner;
                    stack.push(n);
                }
            }
        }
    }

    ownership
}

/// Count stones of each color whose chain only breathes through territory
/// claimed by the other color. Returns `(black, white)`.
pub fn enclosed_stones(grid: &Grid, ownership: &[Cell]) -> (u32, u32) {
    let mut visited = vec![false; grid.len()];
    let mut black = 0;
    let mut white = 0;

    for point in grid.points() {
        let Some(stone) = grid.stone_at(point) else {
            continue;
        };
        if visited[grid.idx(point)] {
            continue;
        }

        let chain = grid.chain(point);
        for &p in &chain {
            visited[grid.idx(p)] = true;
        }

        let enemy = Cell::from(stone.opp());
        let libs = grid.chain_liberties(&chain);
        let enclosed =
            !libs.is_empty() && libs.iter().all(|&l| ownership[grid.idx(l)] == enemy);
        if enclosed {
            match stone {
                Stone::Black => black += chain.len() as u32,
                Stone::White => white += chain.len() as u32,
            }
        }
    }

    (black, white)
}

/// Per-color breakdown: claimed cells, own stones lost to captures, and own
/// stones left enclosed by the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlayerPoints {
    pub territory: u32,
    pub lost: u32,
    pub enclosed: u32,
}

impl PlayerPoints {
    pub fn total(&self) -> f64 {
        self.territory as f64 - self.lost as f64 - self.enclosed as f64
    }
}

/// Full score breakdown for both players.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameScore {
    pub black: PlayerPoints,
    pub white: PlayerPoints,
    pub komi: f64,
}

impl GameScore {
    pub fn black_total(&self) -> f64 {
        self.black.total()
    }

    pub fn white_total(&self) -> f64 {
        self.white.total() + self.komi
    }

    pub fn totals(&self) -> (f64, f64) {
        (self.black_total(), self.white_total())
    }

    pub fn result(&self) -> String {
        format_result(self.black_total(), self.white_total())
    }
}

/// Score the current position.
///
/// black = black territory - white captures - enclosed black stones
/// white = komi + white territory - black captures - enclosed white stones
pub fn score(goban: &Goban, komi: f64) -> GameScore {
    let grid = goban.grid();
    let ownership = claim_territory(grid);
    let (enclosed_black, enclosed_white) = enclosed_stones(grid, &ownership);

    let black_territory = ownership.iter().filter(|&&o| o == Cell::Black).count() as u32;
    let white_territory = ownership.iter().filter(|&&o| o == Cell::White).count() as u32;

    GameScore {
        black: PlayerPoints {
            territory: black_territory,
            lost: goban.captures().get(Stone::White),
            enclosed: enclosed_black,
        },
        white: PlayerPoints {
            territory: white_territory,
            lost: goban.captures().get(Stone::Black),
            enclosed: enclosed_white,
        },
        komi,
    }
}

/// Format the game result string from final scores.
///
/// Returns "B+{diff}", "W+{diff}", or "Draw".
pub fn format_result(black_score: f64, white_score: f64) -> String {
    let diff = black_score - white_score;
    if diff > 0.0 {
        format!("B+{}", diff)
    } else if diff < 0.0 {
        format!("W+{}", -diff)
    } else {
        "Draw".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_KOMI;

    fn count(ownership: &[Cell], cell: Cell) -> usize {
        ownership.iter().filter(|&&o| o == cell).count()
    }

    #[test]
    fn empty_board_is_unclaimed() {
        let grid = Grid::with_side(9);
        let ownership = claim_territory(&grid);
        assert!(ownership.iter().all(|o| o.is_empty()));
    }

    #[test]
    fn empty_board_score_is_komi() {
        let goban = Goban::from_grid(Grid::with_side(9));
        let gs = score(&goban, DEFAULT_KOMI);
        assert_eq!(gs.totals(), (0.0, 5.5));
        assert_eq!(gs.result(), "W+5.5");
    }

    #[test]
    fn single_stone_claims_whole_board() {
        let grid = Grid::from_layout(&["+++", "+B+", "+++"]);
        let ownership = claim_territory(&grid);
        assert_eq!(count(&ownership, Cell::Black), 9);
    }

    #[test]
    fn first_stone_in_scan_order_takes_shared_region() {
        let grid = Grid::from_layout(&["B+W", "+++", "+++"]);
        let ownership = claim_territory(&grid);
        assert_eq!(count(&ownership, Cell::Black), 8);
        assert_eq!(count(&ownership, Cell::White), 1);

        let mirrored = Grid::from_layout(&["W+B", "+++", "+++"]);
        let ownership = claim_territory(&mirrored);
        assert_eq!(count(&ownership, Cell::White), 8);
        assert_eq!(count(&ownership, Cell::Black), 1);
    }

    #[test]
    fn walls_split_regions() {
        let grid = Grid::from_layout(&["+B+W+", "+B+W+", "+B+W+", "+B+W+", "+B+W+"]);
        let ownership = claim_territory(&grid);
        // Black floods columns 0 and 2 before White's first stone is reached.
        assert_eq!(count(&ownership, Cell::Black), 15);
        assert_eq!(count(&ownership, Cell::White), 10);
    }

    #[test]
    fn stone_surrounded_by_enemy_territory_is_enclosed() {
        let grid = Grid::from_layout(&["B+W", "+++", "+++"]);
        let ownership = claim_territory(&grid);
        assert_eq!(enclosed_stones(&grid, &ownership), (0, 1));
    }

    #[test]
    fn stone_with_own_liberty_is_not_enclosed() {
        let grid = Grid::from_layout(&["W+B++", "BB+++", "+++++", "+++++", "+++++"]);
        let ownership = claim_territory(&grid);
        assert_eq!(enclosed_stones(&grid, &ownership), (0, 0));
    }

    #[test]
    fn white_pocket_of_two() {
        // White at (0,0) floods (0,1); Black's stones take everything else.
        let goban = Goban::from_grid(Grid::from_layout(&[
            "W+B++", //
            "BB+++", //
            "+++++", //
            "+++++", //
            "+++++",
        ]));
        let gs = score(&goban, DEFAULT_KOMI);
        assert_eq!(gs.black.territory, 23);
        assert_eq!(gs.white.territory, 2);
        assert_eq!(gs.totals(), (23.0, 7.5));
        assert_eq!(gs.result(), "B+15.5");
    }

    #[test]
    fn enclosed_stone_counts_against_owner() {
        let goban = Goban::from_grid(Grid::from_layout(&[
            "+B+++", //
            "B+B++", //
            "+B+W+", //
            "+++++", //
            "+++++",
        ]));
        let gs = score(&goban, DEFAULT_KOMI);
        assert_eq!(gs.black.territory, 24);
        assert_eq!(gs.white.territory, 1);
        assert_eq!(gs.white.enclosed, 1);
        assert_eq!(gs.black.enclosed, 0);
        assert_eq!(gs.totals(), (24.0, 5.5));
    }

    #[test]
    fn komi_only_for_white() {
        let goban = Goban::from_grid(Grid::from_layout(&["W+B", "+++", "+++"]));
        let gs = score(&goban, 0.5);
        // White's seed comes first and floods the board; Black's stone is enclosed.
        assert_eq!(gs.black_total(), 0.0);
        assert_eq!(gs.white_total(), 8.5);
    }

    #[test]
    fn format_result_strings() {
        assert_eq!(format_result(10.0, 4.5), "B+5.5");
        assert_eq!(format_result(3.0, 9.5), "W+6.5");
        assert_eq!(format_result(5.5, 5.5), "Draw");
    }

    #[test]
    fn score_json_shape() {
        let goban = Goban::from_grid(Grid::from_layout(&["B++", "+++", "+++"]));
        let json = serde_json::to_value(score(&goban, DEFAULT_KOMI)).unwrap();
        assert_eq!(json["black"]["territory"], 9);
        assert_eq!(json["white"]["lost"], 0);
        assert_eq!(json["komi"], 5.5);
    }
}
