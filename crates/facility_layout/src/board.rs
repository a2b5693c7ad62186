use crate::{
    evaluator::{CostReport, LayoutCostEvaluator, format_cost},
    flow::DepartmentId,
    grid::SlotId,
    placement::{MoveOutcome, Placement},
};
use log::{debug, info};

/// A user action on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Drop a department onto a slot (swaps with the occupant, if any)
    Drop { dept: DepartmentId, slot: SlotId },
    /// Drop a department back onto the pool
    ToPool { dept: DepartmentId },
}

/// Interactive session: one placement, recosted after every move
#[derive(Debug, Clone)]
pub struct LayoutBoard {
    placement: Placement,
    evaluator: LayoutCostEvaluator,
    cost: u64,
    history: Vec<u64>,
}

impl LayoutBoard {
    pub fn new(initial: Placement) -> Self {
        Self::with_evaluator(initial, LayoutCostEvaluator::default())
    }

    pub fn with_evaluator(initial: Placement, evaluator: LayoutCostEvaluator) -> Self {
        let cost = evaluator.evaluate(&initial);
        Self {
            placement: initial,
            evaluator,
            cost,
            history: vec![cost],
        }
    }

    /// Applies `mv` and returns the recomputed total.
    /// The total is recomputed from scratch even when the move changed nothing.
    pub fn apply(&mut self, mv: Move) -> u64 {
        let outcome = match mv {
            Move::Drop { dept, slot } => self.placement.drop_on_slot(dept, slot),
            Move::ToPool { dept } => self.placement.return_to_pool(dept),
        };
        match outcome {
            MoveOutcome::Swapped { displaced, to } => debug!(
                "{mv:?}: department {displaced} moved to {}",
                to.map_or_else(|| "pool".to_string(), |slot| format!("slot {slot}"))
            ),
            other => debug!("{mv:?}: {other:?}"),
        }
        self.recompute()
    }

    /// Replaces the whole placement
    pub fn reset(&mut self, placement: Placement) -> u64 {
        self.placement = placement;
        self.recompute()
    }

    fn recompute(&mut self) -> u64 {
        self.cost = self.evaluator.evaluate(&self.placement);
        self.history.push(self.cost);
        info!("New layout total cost: {}", format_cost(self.cost));
        self.cost
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Totals after construction and after every move, oldest first
    pub fn history(&self) -> &[u64] {
        &self.history
    }

    pub fn report(&self) -> CostReport {
        self.evaluator.report(&self.placement)
    }
}
