use facility_layout::{
    DepartmentId, LayoutBoard, LayoutCostEvaluator, Move, Placement, SlotId, cost_factor,
    optimize::{complete_layouts, rank_complete_layouts},
};
use std::collections::HashMap;

fn d(id: u8) -> DepartmentId {
    DepartmentId::new(id).unwrap()
}

fn s(id: u8) -> SlotId {
    SlotId::new(id).unwrap()
}

#[test]
fn test_identity_layout_total() {
    let eval = LayoutCostEvaluator::default();
    let report = eval.report(&Placement::identity());
    assert_eq!(report.total, 570);

    let by_pair: HashMap<(u8, u8), u64> = report
        .flows
        .iter()
        .map(|t| ((t.from.get(), t.to.get()), t.cost))
        .collect();
    assert_eq!(by_pair[&(1, 2)], 50);
    assert_eq!(by_pair[&(1, 3)], 200);
    assert_eq!(by_pair[&(1, 6)], 40); // row diff 1, col diff 2: not diagonal
    assert_eq!(by_pair[&(2, 4)], 50); // diagonal
    assert_eq!(by_pair[&(3, 4)], 40);
}

#[test]
fn test_cost_depends_only_on_distance_structure() {
    // relabel slots through the horizontal and vertical reflections of the grid
    let eval = LayoutCostEvaluator::default();
    for placement in complete_layouts().step_by(37) {
        let cost = eval.evaluate(&placement);
        let flipped =
            placement.remap_slots(|slot| slot.mirrored_horizontally().mirrored_vertically());
        assert_eq!(eval.evaluate(&flipped), cost, "layout {placement:?}");
    }
}

#[test]
fn test_every_complete_layout_is_at_least_total_flow() {
    let eval = LayoutCostEvaluator::default();
    let floor = eval.flows().total();
    for entry in rank_complete_layouts(&eval) {
        assert!(entry.cost >= floor);
        assert!(entry.cost <= 2 * floor);
    }
}

#[test]
fn test_incremental_moves_match_fresh_evaluation() {
    let eval = LayoutCostEvaluator::default();
    let mut board = LayoutBoard::new(Placement::empty());
    let moves = [
        Move::Drop { dept: d(1), slot: s(2) },
        Move::Drop { dept: d(3), slot: s(5) },
        Move::Drop { dept: d(6), slot: s(2) }, // 1 goes back to the pool
        Move::Drop { dept: d(2), slot: s(1) },
        Move::Drop { dept: d(2), slot: s(5) }, // swap with 3
        Move::ToPool { dept: d(6) },
        Move::Drop { dept: d(4), slot: s(6) },
    ];
    for mv in moves {
        let cost = board.apply(mv);
        let snapshot = Placement::from_assignments(board.placement().placed()).unwrap();
        assert_eq!(cost, eval.evaluate(&snapshot));
    }
    assert_eq!(board.placement().to_slot_sequence(), "3,_,_,_,2,4");
}

#[test]
fn test_factor_table() {
    let near = [(1, 2), (1, 4), (1, 5), (2, 3), (2, 4), (2, 5), (2, 6), (3, 5), (3, 6), (4, 5), (5, 6)];
    let far = [(1, 3), (1, 6), (3, 4), (4, 6)];
    for (a, b) in near {
        assert_eq!(cost_factor(s(a), s(b)), 1, "slots {a}-{b}");
    }
    for (a, b) in far {
        assert_eq!(cost_factor(s(a), s(b)), 2, "slots {a}-{b}");
    }
    assert_eq!(near.len() + far.len(), 15);
}
