use crate::{
    constants::{DEPARTMENT_COUNT, FLOW_TABLE},
    error::{LayoutError, Result},
};
use serde::Serialize;
use std::fmt;

/// Department ID (1..=6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DepartmentId(u8);

impl DepartmentId {
    pub const ALL: [DepartmentId; DEPARTMENT_COUNT] = [
        DepartmentId(1),
        DepartmentId(2),
        DepartmentId(3),
        DepartmentId(4),
        DepartmentId(5),
        DepartmentId(6),
    ];

    pub fn new(id: u8) -> Result<Self> {
        if (1..=DEPARTMENT_COUNT as u8).contains(&id) {
            Ok(Self(id))
        } else {
            Err(LayoutError::InvalidDepartment(id))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Directed material flow between departments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowMatrix {
    flows: [[u64; DEPARTMENT_COUNT]; DEPARTMENT_COUNT],
}

impl FlowMatrix {
    /// The fixed flow table of the puzzle
    pub const fn standard() -> Self {
        Self { flows: FLOW_TABLE }
    }

    /// Builds a custom matrix; a department never ships to itself
    pub fn new(flows: [[u64; DEPARTMENT_COUNT]; DEPARTMENT_COUNT]) -> Result<Self> {
        if let Some(i) = (0..DEPARTMENT_COUNT).find(|&i| flows[i][i] != 0) {
            return Err(LayoutError::InvalidFlowMatrix(format!(
                "diagonal entry for department {} must be 0, got {}",
                i + 1,
                flows[i][i]
            )));
        }
        Ok(Self { flows })
    }

    #[inline]
    pub fn flow(&self, from: DepartmentId, to: DepartmentId) -> u64 {
        self.flows[from.index()][to.index()]
    }

    /// Non-zero entries ordered by (from, to)
    pub fn nonzero(&self) -> impl Iterator<Item = (DepartmentId, DepartmentId, u64)> + '_ {
        DepartmentId::ALL.into_iter().flat_map(move |from| {
            DepartmentId::ALL.into_iter().filter_map(move |to| {
                let flow = self.flow(from, to);
                (flow > 0).then_some((from, to, flow))
            })
        })
    }

    /// Sum of all flows; the cost floor of any complete layout
    pub fn total(&self) -> u64 {
        self.flows.iter().flatten().sum()
    }
}

impl Default for FlowMatrix {
    fn default() -> Self {
        Self::standard()
    }
}
