use crate::{flow::DepartmentId, grid::SlotId};
use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LayoutError>;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid department id: {0} (expected 1..=6)")]
    InvalidDepartment(u8),

    #[error("Invalid slot id: {0} (expected 1..=6)")]
    InvalidSlot(u8),

    #[error("Department {0} is assigned to more than one slot")]
    DuplicateDepartment(DepartmentId),

    #[error("Slot {slot} is already occupied by department {occupant}")]
    SlotOccupied {
        slot: SlotId,
        occupant: DepartmentId,
    },

    #[error("Invalid layout '{input}': {message}")]
    LayoutParse { input: String, message: String },

    #[error("Invalid flow matrix: {0}")]
    InvalidFlowMatrix(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to create output directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
