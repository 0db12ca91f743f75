use serde::{Deserialize, Serialize};

use crate::Point;
use crate::stone::Stone;

/// Two coordinate slots owned by one color.
pub type KoSlots = [Option<Point>; 2];

/// One-ply ko memory.
///
/// Each color owns two slots. A capture by a color writes the removed stone's
/// coordinate into both of that color's slots; a placement overwrites the
/// second slot of the opponent. A move onto `p` is forbidden only while both
/// of the opponent's slots hold `p`, which means the opponent's last action
/// was capturing a stone at `p` and nothing has been played since.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ko {
    pub black: KoSlots,
    pub white: KoSlots,
}

impl Ko {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self, stone: Stone) -> &KoSlots {
        match stone {
            Stone::Black => &self.black,
            Stone::White => &self.white,
        }
    }

    fn slots_mut(&mut self, stone: Stone) -> &mut KoSlots {
        match stone {
            Stone::Black => &mut self.black,
            Stone::White => &mut self.white,
        }
    }

    /// `capturer` just removed the stone at `point`.
    pub fn record_capture(&mut self, capturer: Stone, point: Point) {
        *self.slots_mut(capturer) = [Some(point), Some(point)];
    }

    /// `mover` just placed a stone at `point`.
    pub fn record_placement(&mut self, mover: Stone, point: Point) {
        self.slots_mut(mover.opp())[1] = Some(point);
    }

    pub fn is_violation(&self, point: Point, mover: Stone) -> bool {
        self.slots(mover.opp()) == &[Some(point), Some(point)]
    }

    /// The point `stone` may not play on right now, if any.
    pub fn forbidden_point(&self, stone: Stone) -> Option<Point> {
        match *self.slots(stone.opp()) {
            [Some(a), Some(b)] if a == b => Some(a),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_memory_forbids_nothing() {
        let ko = Ko::new();
        assert!(!ko.is_violation((0, 0), Stone::Black));
        assert_eq!(ko.forbidden_point(Stone::White), None);
    }

    #[test]
    fn capture_forbids_opponent_recapture() {
        let mut ko = Ko::new();
        ko.record_capture(Stone::Black, (3, 3));
        assert!(ko.is_violation((3, 3), Stone::White));
        assert!(!ko.is_violation((3, 4), Stone::White));
        assert!(!ko.is_violation((3, 3), Stone::Black));
        assert_eq!(ko.forbidden_point(Stone::White), Some((3, 3)));
    }

    #[test]
    fn opponent_placement_releases_ko() {
        let mut ko = Ko::new();
        ko.record_capture(Stone::Black, (3, 3));
        ko.record_placement(Stone::White, (5, 5));
        assert!(!ko.is_violation((3, 3), Stone::White));
        assert_eq!(ko.slots(Stone::Black), &[Some((3, 3)), Some((5, 5))]);
    }

    #[test]
    fn own_placement_keeps_ko() {
        let mut ko = Ko::new();
        ko.record_capture(Stone::Black, (3, 3));
        ko.record_placement(Stone::Black, (5, 5));
        assert!(ko.is_violation((3, 3), Stone::White));
    }

    #[test]
    fn last_capture_wins() {
        let mut ko = Ko::new();
        ko.record_capture(Stone::White, (0, 0));
        ko.record_capture(Stone::White, (0, 1));
        assert!(!ko.is_violation((0, 0), Stone::Black));
        assert!(ko.is_violation((0, 1), Stone::Black));
    }

    #[test]
    fn json_shape() {
        let mut ko = Ko::new();
        ko.record_capture(Stone::Black, (1, 2));
        let json = serde_json::to_value(&ko).unwrap();
        assert_eq!(json["black"], serde_json::json!([[1, 2], [1, 2]]));
        assert_eq!(json["white"], serde_json::json!([null, null]));
    }
}
