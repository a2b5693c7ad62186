/// Grid settings
pub const GRID_ROWS: u8 = 2;
pub const GRID_COLS: u8 = 3;
pub const SLOT_COUNT: usize = 6; // GRID_ROWS x GRID_COLS
pub const DEPARTMENT_COUNT: usize = 6;

/// Slot coordinates (row, col), 1-indexed; slot id k lives at index k - 1
pub const SLOT_COORDS: [(u8, u8); SLOT_COUNT] = [
    (1, 1), // slot 1
    (1, 2), // slot 2
    (1, 3), // slot 3
    (2, 1), // slot 4
    (2, 2), // slot 5
    (2, 3), // slot 6
];

/// Material flow per unit time (row = from department, column = to department)
pub const FLOW_TABLE: [[u64; DEPARTMENT_COUNT]; DEPARTMENT_COUNT] = [
    /* To ->       1,  2,   3,  4,  5,   6 */
    /* From 1 */ [0, 50, 100, 0, 0, 20],
    /* From 2 */ [0, 0, 30, 50, 10, 0],
    /* From 3 */ [0, 0, 0, 20, 0, 100],
    /* From 4 */ [0, 0, 0, 0, 50, 0],
    /* From 5 */ [0, 0, 0, 0, 0, 0],
    /* From 6 */ [0, 0, 0, 0, 0, 0],
];

/// Cost factors
pub const SAME_SLOT_FACTOR: u64 = 0;
pub const NEAR_FACTOR: u64 = 1; // orthogonal or diagonal neighbour
pub const FAR_FACTOR: u64 = 2;

/// Output settings
pub const ENV_OUTPUT_DIR: &str = "FACILITY_LAYOUT_OUTPUT_DIR";
pub const DEFAULT_OUTPUT_DIR: &str = "reports";
pub const REPORT_FILE_PREFIX: &str = "layout_cost";
pub const RANKING_FILE_PREFIX: &str = "layout_ranking";

/// Placeholders accepted for an empty slot in a slot sequence
pub const EMPTY_SLOT_MARKERS: [&str; 4] = ["", "_", "-", "0"];
