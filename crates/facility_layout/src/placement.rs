use crate::{
    constants::{DEPARTMENT_COUNT, EMPTY_SLOT_MARKERS, GRID_COLS, SLOT_COUNT},
    error::{LayoutError, Result},
    flow::DepartmentId,
    grid::SlotId,
};
use serde::{Serialize, Serializer};
use std::fmt;

/// Partial, injective assignment of departments to slots.
///
/// Indexed by department, so a department can never hold two slots.
/// The moves below keep the other direction (one department per slot) intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Placement {
    slots: [Option<SlotId>; DEPARTMENT_COUNT],
}

/// What a move did to the placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Moved into an empty slot (from the pool when `from` is None)
    Placed { from: Option<SlotId> },
    /// Target was occupied; the displaced department took the mover's old place
    Swapped {
        displaced: DepartmentId,
        to: Option<SlotId>,
    },
    /// Sent back to the pool
    Pooled { from: SlotId },
    Unchanged,
}

impl Placement {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Department k in slot k
    pub fn identity() -> Self {
        let mut slots = [None; DEPARTMENT_COUNT];
        for (entry, slot) in slots.iter_mut().zip(SlotId::ALL) {
            *entry = Some(slot);
        }
        Self { slots }
    }

    pub fn from_assignments<I>(assignments: I) -> Result<Self>
    where
        I: IntoIterator<Item = (DepartmentId, SlotId)>,
    {
        let mut placement = Self::empty();
        for (dept, slot) in assignments {
            if placement.slot_of(dept).is_some() {
                return Err(LayoutError::DuplicateDepartment(dept));
            }
            if let Some(occupant) = placement.occupant(slot) {
                return Err(LayoutError::SlotOccupied { slot, occupant });
            }
            placement.slots[dept.index()] = Some(slot);
        }
        Ok(placement)
    }

    /// Parses a comma separated list read slot by slot: entry k names the
    /// department in slot k. `_`, `-`, `0` or nothing mark an empty slot.
    ///
    /// `"2,1,_,4,5,6"` puts department 2 in slot 1 and leaves slot 3 empty.
    pub fn from_slot_sequence(input: &str) -> Result<Self> {
        let parse_err = |message: String| LayoutError::LayoutParse {
            input: input.to_string(),
            message,
        };

        let entries: Vec<&str> = input.split(',').map(str::trim).collect();
        if entries.len() != SLOT_COUNT {
            return Err(parse_err(format!(
                "expected {} comma separated slots, got {}",
                SLOT_COUNT,
                entries.len()
            )));
        }

        let mut assignments = Vec::with_capacity(SLOT_COUNT);
        for (slot, entry) in SlotId::ALL.into_iter().zip(entries) {
            if EMPTY_SLOT_MARKERS.contains(&entry) {
                continue;
            }
            let id: u8 = entry
                .parse()
                .map_err(|_| parse_err(format!("slot {slot}: '{entry}' is not a department")))?;
            let dept = DepartmentId::new(id).map_err(|e| parse_err(format!("slot {slot}: {e}")))?;
            assignments.push((dept, slot));
        }

        Self::from_assignments(assignments)
    }

    /// Inverse of [`Placement::from_slot_sequence`], with `_` for empty slots
    pub fn to_slot_sequence(&self) -> String {
        self.occupants()
            .iter()
            .map(|occupant| match occupant {
                Some(dept) => dept.to_string(),
                None => "_".to_string(),
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    #[inline]
    pub fn slot_of(&self, dept: DepartmentId) -> Option<SlotId> {
        self.slots[dept.index()]
    }

    pub fn occupant(&self, slot: SlotId) -> Option<DepartmentId> {
        DepartmentId::ALL
            .into_iter()
            .find(|&dept| self.slot_of(dept) == Some(slot))
    }

    /// Occupant of every slot, in slot order
    pub fn occupants(&self) -> [Option<DepartmentId>; SLOT_COUNT] {
        let mut out = [None; SLOT_COUNT];
        for (dept, slot) in self.placed() {
            out[slot.index()] = Some(dept);
        }
        out
    }

    /// Placed departments with their slots, in department order
    pub fn placed(&self) -> impl Iterator<Item = (DepartmentId, SlotId)> + '_ {
        DepartmentId::ALL
            .into_iter()
            .filter_map(|dept| self.slot_of(dept).map(|slot| (dept, slot)))
    }

    /// Departments still waiting in the pool
    pub fn pool(&self) -> impl Iterator<Item = DepartmentId> + '_ {
        DepartmentId::ALL
            .into_iter()
            .filter(|&dept| self.slot_of(dept).is_none())
    }

    pub fn placed_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.placed_count() == 0
    }

    pub fn is_complete(&self) -> bool {
        self.placed_count() == DEPARTMENT_COUNT
    }

    /// Drops `dept` onto `target`.
    ///
    /// An occupied target swaps: the department already there goes to
    /// wherever `dept` came from, which is the pool if `dept` was unplaced.
    pub fn drop_on_slot(&mut self, dept: DepartmentId, target: SlotId) -> MoveOutcome {
        let origin = self.slot_of(dept);
        if origin == Some(target) {
            return MoveOutcome::Unchanged;
        }

        match self.occupant(target) {
            None => {
                self.slots[dept.index()] = Some(target);
                MoveOutcome::Placed { from: origin }
            }
            Some(displaced) => {
                self.slots[displaced.index()] = origin;
                self.slots[dept.index()] = Some(target);
                MoveOutcome::Swapped {
                    displaced,
                    to: origin,
                }
            }
        }
    }

    pub fn return_to_pool(&mut self, dept: DepartmentId) -> MoveOutcome {
        match self.slots[dept.index()].take() {
            Some(from) => MoveOutcome::Pooled { from },
            None => MoveOutcome::Unchanged,
        }
    }

    /// Relabels every slot through `f`; `f` must be a bijection on slots
    pub fn remap_slots(&self, f: impl Fn(SlotId) -> SlotId) -> Self {
        let mut slots = self.slots;
        for slot in slots.iter_mut().flatten() {
            *slot = f(*slot);
        }
        Self { slots }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self
            .occupants()
            .iter()
            .map(|occupant| match occupant {
                Some(dept) => format!("[{dept}]"),
                None => "[.]".to_string(),
            })
            .collect();

        let rows: Vec<String> = cells
            .chunks(GRID_COLS as usize)
            .map(|row| row.concat())
            .collect();
        write!(f, "{}", rows.join("\n"))
    }
}

impl Serialize for Placement {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_slot_sequence())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(id: u8) -> DepartmentId {
        DepartmentId::new(id).unwrap()
    }

    fn s(id: u8) -> SlotId {
        SlotId::new(id).unwrap()
    }

    fn assert_injective(p: &Placement) {
        let mut seen = std::collections::HashSet::new();
        for (_, slot) in p.placed() {
            assert!(seen.insert(slot), "slot {slot} used twice in {p:?}");
        }
    }

    #[test]
    fn test_empty_and_identity() {
        let empty = Placement::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.pool().count(), 6);

        let identity = Placement::identity();
        assert!(identity.is_complete());
        for dept in DepartmentId::ALL {
            assert_eq!(identity.slot_of(dept).map(SlotId::get), Some(dept.get()));
        }
    }

    #[test]
    fn test_from_assignments_rejects_duplicates() {
        let err = Placement::from_assignments([(d(1), s(1)), (d(1), s(2))]).unwrap_err();
        assert!(matches!(err, LayoutError::DuplicateDepartment(dept) if dept == d(1)));

        let err = Placement::from_assignments([(d(1), s(4)), (d(2), s(4))]).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::SlotOccupied { slot, occupant } if slot == s(4) && occupant == d(1)
        ));
    }

    #[test]
    fn test_slot_sequence_parsing() {
        let p = Placement::from_slot_sequence("2, 1, _, 4, -, 0").unwrap();
        assert_eq!(p.occupant(s(1)), Some(d(2)));
        assert_eq!(p.occupant(s(2)), Some(d(1)));
        assert_eq!(p.occupant(s(3)), None);
        assert_eq!(p.placed_count(), 3);
        assert_eq!(p.to_slot_sequence(), "2,1,_,4,_,_");

        let identity = Placement::from_slot_sequence("1,2,3,4,5,6").unwrap();
        assert_eq!(identity, Placement::identity());
    }

    #[test]
    fn test_slot_sequence_errors() {
        assert!(matches!(
            Placement::from_slot_sequence("1,2,3"),
            Err(LayoutError::LayoutParse { .. })
        ));
        assert!(matches!(
            Placement::from_slot_sequence("1,2,3,4,5,x"),
            Err(LayoutError::LayoutParse { .. })
        ));
        assert!(matches!(
            Placement::from_slot_sequence("1,2,3,4,5,9"),
            Err(LayoutError::LayoutParse { .. })
        ));
        assert!(matches!(
            Placement::from_slot_sequence("1,1,_,_,_,_"),
            Err(LayoutError::DuplicateDepartment(_))
        ));
    }

    #[test]
    fn test_drop_from_pool_into_empty_slot() {
        let mut p = Placement::empty();
        assert_eq!(p.drop_on_slot(d(3), s(5)), MoveOutcome::Placed { from: None });
        assert_eq!(p.slot_of(d(3)), Some(s(5)));
    }

    #[test]
    fn test_drop_between_slots() {
        let mut p = Placement::from_slot_sequence("1,_,_,_,_,_").unwrap();
        assert_eq!(
            p.drop_on_slot(d(1), s(6)),
            MoveOutcome::Placed { from: Some(s(1)) }
        );
        assert_eq!(p.occupant(s(1)), None);
        assert_eq!(p.occupant(s(6)), Some(d(1)));
    }

    #[test]
    fn test_drop_on_occupied_slot_swaps() {
        let mut p = Placement::identity();
        let outcome = p.drop_on_slot(d(1), s(6));
        assert_eq!(
            outcome,
            MoveOutcome::Swapped {
                displaced: d(6),
                to: Some(s(1))
            }
        );
        assert_eq!(p.to_slot_sequence(), "6,2,3,4,5,1");
        assert_injective(&p);
    }

    #[test]
    fn test_drop_from_pool_on_occupied_slot_pools_occupant() {
        let mut p = Placement::from_slot_sequence("1,2,_,_,_,_").unwrap();
        let outcome = p.drop_on_slot(d(5), s(2));
        assert_eq!(
            outcome,
            MoveOutcome::Swapped {
                displaced: d(2),
                to: None
            }
        );
        assert_eq!(p.slot_of(d(2)), None);
        assert_eq!(p.slot_of(d(5)), Some(s(2)));
        assert_injective(&p);
    }

    #[test]
    fn test_drop_on_own_slot_is_noop() {
        let mut p = Placement::identity();
        assert_eq!(p.drop_on_slot(d(4), s(4)), MoveOutcome::Unchanged);
        assert_eq!(p, Placement::identity());
    }

    #[test]
    fn test_return_to_pool() {
        let mut p = Placement::identity();
        assert_eq!(p.return_to_pool(d(2)), MoveOutcome::Pooled { from: s(2) });
        assert_eq!(p.return_to_pool(d(2)), MoveOutcome::Unchanged);
        assert_eq!(p.pool().collect::<Vec<_>>(), vec![d(2)]);
        assert!(!p.is_complete());
    }

    #[test]
    fn test_move_sequence_stays_injective() {
        let mut p = Placement::empty();
        let moves = [(1, 1), (2, 1), (3, 2), (1, 2), (4, 6), (5, 6), (6, 3), (2, 3)];
        for (dept, slot) in moves {
            p.drop_on_slot(d(dept), s(slot));
            assert_injective(&p);
        }
    }

    #[test]
    fn test_display_grid() {
        let p = Placement::from_slot_sequence("1,_,3,4,5,_").unwrap();
        assert_eq!(p.to_string(), "[1][.][3]\n[4][5][.]");
    }

    #[test]
    fn test_remap_slots() {
        let mirrored = Placement::identity().remap_slots(SlotId::mirrored_horizontally);
        assert_eq!(mirrored.to_slot_sequence(), "3,2,1,6,5,4");
        assert!(mirrored.is_complete());
    }
}
