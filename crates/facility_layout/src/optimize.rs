use crate::{
    constants::SLOT_COUNT,
    evaluator::LayoutCostEvaluator,
    flow::DepartmentId,
    grid::SlotId,
    placement::Placement,
};
use itertools::Itertools;
use log::{debug, info};
use serde::Serialize;
use std::collections::HashSet;

/// A complete layout and its cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedLayout {
    pub placement: Placement,
    pub cost: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSummary {
    pub count: usize,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
}

/// Every placement with all six departments on the grid (6! = 720)
pub fn complete_layouts() -> impl Iterator<Item = Placement> {
    SlotId::ALL
        .into_iter()
        .permutations(SLOT_COUNT)
        .map(|slots| {
            let mut placement = Placement::empty();
            for (dept, slot) in DepartmentId::ALL.into_iter().zip(slots) {
                placement.drop_on_slot(dept, slot);
            }
            placement
        })
}

/// All complete layouts, cheapest first; ties ordered by slot occupants
pub fn rank_complete_layouts(evaluator: &LayoutCostEvaluator) -> Vec<RankedLayout> {
    let mut ranking: Vec<RankedLayout> = complete_layouts()
        .map(|placement| RankedLayout {
            cost: evaluator.evaluate(&placement),
            placement,
        })
        .collect();
    debug!("evaluated {} complete layouts", ranking.len());

    ranking.sort_by(|a, b| {
        a.cost
            .cmp(&b.cost)
            .then_with(|| a.placement.occupants().cmp(&b.placement.occupants()))
    });
    ranking
}

/// Layouts tied at the minimum cost
pub fn best_layouts(evaluator: &LayoutCostEvaluator) -> Vec<RankedLayout> {
    let ranking = rank_complete_layouts(evaluator);
    let Some(min) = ranking.first().map(|r| r.cost) else {
        return Vec::new();
    };
    let best: Vec<_> = ranking.into_iter().take_while(|r| r.cost == min).collect();
    info!("{} layouts reach the minimum cost {}", best.len(), min);
    best
}

pub fn summarize(ranking: &[RankedLayout]) -> Option<CostSummary> {
    let (min, max) = ranking.iter().map(|r| r.cost).minmax().into_option()?;
    let sum: u64 = ranking.iter().map(|r| r.cost).sum();
    Some(CostSummary {
        count: ranking.len(),
        min,
        max,
        mean: sum as f64 / ranking.len() as f64,
    })
}

/// Drops layouts that are a horizontal or vertical mirror of an earlier one
pub fn distinct_up_to_mirroring(layouts: &[RankedLayout]) -> Vec<RankedLayout> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for layout in layouts {
        let p = layout.placement;
        let images = [
            p,
            p.remap_slots(SlotId::mirrored_horizontally),
            p.remap_slots(SlotId::mirrored_vertically),
            p.remap_slots(|s| s.mirrored_horizontally().mirrored_vertically()),
        ];
        if images.iter().any(|image| seen.contains(image)) {
            continue;
        }
        seen.insert(p);
        out.push(layout.clone());
    }
    out
}
