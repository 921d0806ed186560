//! Analysis constants and runtime configuration defaults

// Cell data item names
/// Data item holding the reference area of a cell
pub const TARGET_AREA_ITEM: &str = "target area";

// Mechanical parameter defaults (Farhadifar et al. 2007 values)
/// Default area elasticity modulus
pub const DEFAULT_AREA_ELASTICITY: f64 = 1.0;
/// Default perimeter contractility modulus
pub const DEFAULT_PERIMETER_CONTRACTILITY: f64 = 0.04;
/// Default bulk line tension coefficient
pub const DEFAULT_LINE_TENSION: f64 = 0.12;
/// Default boundary line tension coefficient
pub const DEFAULT_BOUNDARY_LINE_TENSION: f64 = 0.12;

// Honeycomb generator defaults
/// Default number of cells across each honeycomb row
pub const DEFAULT_COLUMNS: usize = 8;
/// Default number of honeycomb rows
pub const DEFAULT_ROWS: usize = 8;
/// Default area of a regular honeycomb cell
pub const DEFAULT_CELL_AREA: f64 = 1.0;
/// Default node displacement, as a fraction of the hexagon side length
pub const DEFAULT_JITTER: f64 = 0.0;
/// Node displacement used by the command-line driver
///
/// A regular honeycomb has uniform areas, for which correlations are undefined.
pub const DEFAULT_SNAPSHOT_JITTER: f64 = 0.2;

// Sampling defaults
/// Fixed seed for reproducible snapshots
pub const DEFAULT_SEED: u64 = 42;
/// Default number of snapshots to analyse
pub const DEFAULT_SNAPSHOTS: usize = 1;
/// Default simulation time between consecutive snapshots
pub const DEFAULT_SAMPLING_INTERVAL: f64 = 1.0;
/// Default directory receiving the output series
pub const DEFAULT_OUTPUT_DIR: &str = "vertexstats_output";

// Output settings
/// Column delimiter for every output series
pub const COLUMN_DELIMITER: char = '\t';
/// Area correlation series file name
pub const AREA_CORRELATION_FILE: &str = "areacorrelations.dat";
/// Neighbour number correlation series file name
pub const NEIGHBOUR_CORRELATION_FILE: &str = "neighbournumbercorrelations.dat";
/// Per-cell force decomposition series file name
pub const CELL_FORCES_FILE: &str = "cellforces.dat";
/// Per-cell perimeter series file name
pub const CELL_PERIMETERS_FILE: &str = "cellperimeters.dat";
/// Per-cell polygon summary series file name
pub const VERTEX_MODEL_DATA_FILE: &str = "vertexmodeldata.dat";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
