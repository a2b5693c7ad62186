pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluator;
pub mod export;
pub mod flow;
pub mod grid;
pub mod optimize;
pub mod placement;

pub use board::{LayoutBoard, Move};
pub use config::Config;
pub use constants::{DEPARTMENT_COUNT, FLOW_TABLE, SLOT_COORDS, SLOT_COUNT};
pub use error::{LayoutError, Result};
pub use evaluator::{CostReport, FlowCost, LayoutCostEvaluator, format_cost};
pub use export::{ReportFormat, export_ranking, export_report};
pub use flow::{DepartmentId, FlowMatrix};
pub use grid::{Coord, Proximity, SlotId, cost_factor, manhattan};
pub use optimize::{RankedLayout, best_layouts, rank_complete_layouts};
pub use placement::{MoveOutcome, Placement};
