use crate::{
    flow::{DepartmentId, FlowMatrix},
    grid::{SlotId, cost_factor, slot_distance},
    placement::Placement,
};
use serde::Serialize;
use std::fmt;

/// Weighted cost of one directed flow in a placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowCost {
    pub from: DepartmentId,
    pub to: DepartmentId,
    pub from_slot: SlotId,
    pub to_slot: SlotId,
    pub distance: u8,
    pub factor: u64,
    pub flow: u64,
    pub cost: u64,
}

/// Total cost of a placement with its per-flow terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostReport {
    pub layout: Placement,
    pub total: u64,
    pub flows: Vec<FlowCost>,
}

impl fmt::Display for CostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.layout)?;
        for term in &self.flows {
            writeln!(
                f,
                "  {} -> {}  slots {} -> {}  dist {}  {:>3} x {} = {}",
                term.from,
                term.to,
                term.from_slot,
                term.to_slot,
                term.distance,
                term.flow,
                term.factor,
                term.cost
            )?;
        }
        write!(f, "Total cost: {}", format_cost(self.total))
    }
}

/// Transportation cost of a placement under a fixed flow matrix
#[derive(Debug, Clone, Default)]
pub struct LayoutCostEvaluator {
    flows: FlowMatrix,
}

impl LayoutCostEvaluator {
    pub fn new(flows: FlowMatrix) -> Self {
        Self { flows }
    }

    pub fn flows(&self) -> &FlowMatrix {
        &self.flows
    }

    /// Sum of `flow[i][j] * factor(slot(i), slot(j))` over every ordered pair
    /// of distinct placed departments. Unplaced departments contribute nothing.
    ///
    /// The placement is assumed injective; two departments sharing a slot
    /// are not detected here.
    pub fn evaluate(&self, placement: &Placement) -> u64 {
        let mut total = 0;
        for (from, from_slot) in placement.placed() {
            for (to, to_slot) in placement.placed() {
                if from == to {
                    continue;
                }
                let flow = self.flows.flow(from, to);
                if flow > 0 {
                    total += flow * cost_factor(from_slot, to_slot);
                }
            }
        }
        total
    }

    /// Cost terms of every non-zero flow with both ends placed, ordered by (from, to)
    pub fn breakdown(&self, placement: &Placement) -> Vec<FlowCost> {
        self.flows
            .nonzero()
            .filter_map(|(from, to, flow)| {
                let from_slot = placement.slot_of(from)?;
                let to_slot = placement.slot_of(to)?;
                let factor = cost_factor(from_slot, to_slot);
                Some(FlowCost {
                    from,
                    to,
                    from_slot,
                    to_slot,
                    distance: slot_distance(from_slot, to_slot),
                    factor,
                    flow,
                    cost: flow * factor,
                })
            })
            .collect()
    }

    pub fn report(&self, placement: &Placement) -> CostReport {
        CostReport {
            layout: *placement,
            total: self.evaluate(placement),
            flows: self.breakdown(placement),
        }
    }
}

/// Display form of a total: a whole number, no decimal places
pub fn format_cost(cost: u64) -> String {
    cost.to_string()
}
