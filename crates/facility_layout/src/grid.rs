use crate::{
    constants::{FAR_FACTOR, GRID_COLS, GRID_ROWS, NEAR_FACTOR, SAME_SLOT_FACTOR, SLOT_COORDS},
    error::{LayoutError, Result},
};
use serde::Serialize;
use std::fmt;

/// Grid coordinate (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Slot ID in the 2x3 grid (1..=6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SlotId(u8);

impl SlotId {
    pub const ALL: [SlotId; 6] = [
        SlotId(1),
        SlotId(2),
        SlotId(3),
        SlotId(4),
        SlotId(5),
        SlotId(6),
    ];

    pub fn new(id: u8) -> Result<Self> {
        if (1..=SLOT_COORDS.len() as u8).contains(&id) {
            Ok(Self(id))
        } else {
            Err(LayoutError::InvalidSlot(id))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize - 1
    }

    pub fn coord(self) -> Coord {
        let (row, col) = SLOT_COORDS[self.index()];
        Coord { row, col }
    }

    /// Inverse of [`SlotId::coord`]
    pub fn at(row: u8, col: u8) -> Option<SlotId> {
        let target = Coord::new(row, col);
        Self::ALL.into_iter().find(|slot| slot.coord() == target)
    }

    /// Slot in the same row, reflected across the middle column
    pub fn mirrored_horizontally(self) -> SlotId {
        let Coord { row, col } = self.coord();
        Self::at(row, GRID_COLS + 1 - col).unwrap_or(self)
    }

    /// Slot in the same column, reflected across the horizontal axis
    pub fn mirrored_vertically(self) -> SlotId {
        let Coord { row, col } = self.coord();
        Self::at(GRID_ROWS + 1 - row, col).unwrap_or(self)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How two slots relate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Proximity {
    Same,
    Orthogonal,
    Diagonal,
    Distant,
}

impl Proximity {
    pub fn between(a: Coord, b: Coord) -> Self {
        let dr = a.row.abs_diff(b.row);
        let dc = a.col.abs_diff(b.col);
        match (dr + dc, dr, dc) {
            (0, _, _) => Proximity::Same,
            (1, _, _) => Proximity::Orthogonal,
            (2, 1, 1) => Proximity::Diagonal,
            _ => Proximity::Distant,
        }
    }

    /// Multiplier applied to a flow between slots with this relation.
    /// Distance 3 is not special-cased: every non-neighbour pays double.
    pub fn cost_factor(self) -> u64 {
        match self {
            Proximity::Same => SAME_SLOT_FACTOR,
            Proximity::Orthogonal | Proximity::Diagonal => NEAR_FACTOR,
            Proximity::Distant => FAR_FACTOR,
        }
    }
}

/// Manhattan distance between two coordinates
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u8 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

#[inline]
pub fn slot_distance(a: SlotId, b: SlotId) -> u8 {
    manhattan(a.coord(), b.coord())
}

#[inline]
pub fn cost_factor(a: SlotId, b: SlotId) -> u64 {
    Proximity::between(a.coord(), b.coord()).cost_factor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_slot_id_range() {
        assert!(SlotId::new(0).is_err());
        assert!(SlotId::new(7).is_err());
        for id in 1..=6 {
            assert_eq!(SlotId::new(id).unwrap().get(), id);
        }
    }

    #[test]
    fn test_slot_coordinates() {
        let expected = [(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)];
        for (slot, (row, col)) in SlotId::ALL.into_iter().zip(expected) {
            assert_eq!(slot.coord(), Coord::new(row, col));
            assert_eq!(SlotId::at(row, col), Some(slot));
        }
        assert_eq!(SlotId::at(3, 1), None);
    }

    #[test]
    fn test_manhattan_extremes() {
        let s1 = SlotId::new(1).unwrap();
        let s6 = SlotId::new(6).unwrap();
        assert_eq!(slot_distance(s1, s1), 0);
        assert_eq!(slot_distance(s1, s6), 3);
        assert_eq!(cost_factor(s1, s1), 0);
    }

    #[test]
    fn test_cost_factor_all_unordered_pairs() {
        let pairs: Vec<_> = SlotId::ALL.into_iter().tuple_combinations().collect();
        assert_eq!(pairs.len(), 15);

        for (a, b) in pairs {
            // neighbours are exactly the slots one king-move apart
            let (ca, cb) = (a.coord(), b.coord());
            let neighbour = ca.row.abs_diff(cb.row) <= 1 && ca.col.abs_diff(cb.col) <= 1;
            let expected = if neighbour { 1 } else { 2 };
            assert_eq!(cost_factor(a, b), expected, "slots {a} and {b}");
            assert_eq!(cost_factor(b, a), expected, "slots {b} and {a}");
        }
    }

    #[test]
    fn test_proximity_classification() {
        let s = |id| SlotId::new(id).unwrap().coord();
        assert_eq!(Proximity::between(s(1), s(2)), Proximity::Orthogonal);
        assert_eq!(Proximity::between(s(2), s(5)), Proximity::Orthogonal);
        assert_eq!(Proximity::between(s(2), s(4)), Proximity::Diagonal);
        assert_eq!(Proximity::between(s(1), s(3)), Proximity::Distant);
        assert_eq!(Proximity::between(s(3), s(4)), Proximity::Distant);
        assert_eq!(Proximity::between(s(5), s(5)), Proximity::Same);
    }

    #[test]
    fn test_mirroring() {
        let s = |id| SlotId::new(id).unwrap();
        assert_eq!(s(1).mirrored_horizontally(), s(3));
        assert_eq!(s(5).mirrored_horizontally(), s(5));
        assert_eq!(s(4).mirrored_vertically(), s(1));
        assert_eq!(s(6).mirrored_vertically(), s(3));
    }
}
