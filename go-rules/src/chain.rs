//! Group connectivity: chains of same-colored stones and their liberties.
//!
//! Every traversal keeps its own visited set and an explicit work stack, so
//! nothing leaks between calls and depth is bounded by the board area.

use crate::Point;
use crate::grid::Grid;

impl Grid {
    /// Does the chain containing `point` touch at least one empty cell?
    /// Early-exit DFS. Empty points have no chain and report false.
    pub fn has_liberty(&self, point: Point) -> bool {
        let Some(stone) = self.stone_at(point) else {
            return false;
        };

        let mut visited = vec![false; self.len()];
        let mut stack = vec![point];

        while let Some(p) = stack.pop() {
            let vi = self.idx(p);
            if visited[vi] {
                continue;
            }
            visited[vi] = true;
            for n in self.neighbors(p) {
                match self.get(n).stone() {
                    None => return true,
                    Some(s) if s == stone && !visited[self.idx(n)] => stack.push(n),
                    Some(_) => {}
                }
            }
        }

        false
    }

    /// Flood-fill the connected group of same-colored stones, in visit order.
    pub fn chain(&self, point: Point) -> Vec<Point> {
        let Some(stone) = self.stone_at(point) else {
            return Vec::new();
        };

        let mut visited = vec![false; self.len()];
        let mut result = Vec::new();
        let mut stack = vec![point];

        while let Some(p) = stack.pop() {
            let vi = self.idx(p);
            if visited[vi] {
                continue;
            }
            visited[vi] = true;
            result.push(p);
            for n in self.neighbors(p) {
                if self.stone_at(n) == Some(stone) && !visited[self.idx(n)] {
                    stack.push(n);
                }
            }
        }

        result
    }

    /// Distinct liberties of the chain containing `point`.
    pub fn liberties(&self, point: Point) -> Vec<Point> {
        let chain = self.chain(point);
        self.chain_liberties(&chain)
    }

    /// Distinct liberties of a pre-computed chain.
    pub fn chain_liberties(&self, chain: &[Point]) -> Vec<Point> {
        let mut seen = vec![false; self.len()];
        let mut libs = Vec::new();
        for &p in chain {
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if !seen[ni] && self.get(n).is_empty() {
                    seen[ni] = true;
                    libs.push(n);
                }
            }
        }
        libs
    }
}
