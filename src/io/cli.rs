//! Command-line driver sampling honeycomb snapshots and recording every analysis

use crate::analysis::forces::MechanicalParameters;
use crate::io::configuration::{
    DEFAULT_AREA_ELASTICITY, DEFAULT_BOUNDARY_LINE_TENSION, DEFAULT_CELL_AREA, DEFAULT_COLUMNS,
    DEFAULT_LINE_TENSION, DEFAULT_OUTPUT_DIR, DEFAULT_PERIMETER_CONTRACTILITY, DEFAULT_ROWS,
    DEFAULT_SAMPLING_INTERVAL, DEFAULT_SEED, DEFAULT_SNAPSHOT_JITTER, DEFAULT_SNAPSHOTS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::recorder::{OutputKind, SnapshotRecorder};
use crate::topology::honeycomb::HoneycombGenerator;
use crate::topology::population::CellPopulation;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "vertexstats")]
#[command(
    author,
    version,
    about = "Neighbour statistics and force decomposition for vertex-model tissues"
)]
/// Command-line arguments for the snapshot analysis driver
pub struct Cli {
    /// Directory receiving the output series
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Number of cells across each honeycomb row
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Number of honeycomb rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Area of each regular honeycomb cell
    #[arg(long, default_value_t = DEFAULT_CELL_AREA)]
    pub cell_area: f64,

    /// Target area assigned to every cell (defaults to the cell area)
    #[arg(long, allow_hyphen_values = true)]
    pub target_area: Option<f64>,

    /// Node displacement as a fraction of the hexagon side length
    #[arg(short, long, default_value_t = DEFAULT_SNAPSHOT_JITTER)]
    pub jitter: f64,

    /// Number of snapshots to analyse
    #[arg(short = 'n', long, default_value_t = DEFAULT_SNAPSHOTS)]
    pub snapshots: usize,

    /// Simulation time between consecutive snapshots
    #[arg(long, default_value_t = DEFAULT_SAMPLING_INTERVAL)]
    pub sampling_interval: f64,

    /// Base seed; snapshot i uses seed + i
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Area elasticity modulus
    #[arg(long, default_value_t = DEFAULT_AREA_ELASTICITY)]
    pub area_elasticity: f64,

    /// Perimeter contractility modulus
    #[arg(long, default_value_t = DEFAULT_PERIMETER_CONTRACTILITY)]
    pub perimeter_contractility: f64,

    /// Bulk line tension (negative values zero the boundary tension)
    #[arg(long, default_value_t = DEFAULT_LINE_TENSION, allow_hyphen_values = true)]
    pub line_tension: f64,

    /// Boundary line tension
    #[arg(long, default_value_t = DEFAULT_BOUNDARY_LINE_TENSION, allow_hyphen_values = true)]
    pub boundary_line_tension: f64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Mechanical parameters selected on the command line
    pub const fn parameters(&self) -> MechanicalParameters {
        MechanicalParameters::new(
            self.area_elasticity,
            self.perimeter_contractility,
            self.line_tension,
            self.boundary_line_tension,
        )
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generator for snapshot `index`
    pub fn generator(&self, index: usize) -> HoneycombGenerator {
        HoneycombGenerator::new(self.columns, self.rows)
            .with_cell_area(self.cell_area)
            .with_jitter(self.jitter)
            .with_seed(self.seed.wrapping_add(index as u64))
            .with_target_area(self.target_area.unwrap_or(self.cell_area))
    }
}

/// Samples snapshots and records the analyses of each one
pub struct SnapshotProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl SnapshotProcessor {
    /// Create a processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new(cli.snapshots)
        } else {
            ProgressManager::hidden(cli.snapshots)
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Analyse every snapshot and write all output series
    ///
    /// # Errors
    ///
    /// Returns an error if an argument is invalid, a snapshot cannot be
    /// generated, or an analysis or write fails
    pub fn process(&mut self) -> Result<()> {
        if !self.cli.sampling_interval.is_finite() || self.cli.sampling_interval <= 0.0 {
            return Err(invalid_parameter(
                "sampling_interval",
                &self.cli.sampling_interval,
                &"must be finite and positive",
            ));
        }

        let start_time = Instant::now();
        let mut recorder =
            SnapshotRecorder::create(&self.cli.output_dir, &OutputKind::ALL, self.cli.parameters())?;

        for index in 0..self.cli.snapshots {
            let time = index as f64 * self.cli.sampling_interval;
            let population = CellPopulation::from(self.cli.generator(index).generate()?);
            let skipped = recorder.record(time, &population)?;
            if !skipped.is_empty() {
                log::debug!("Snapshot {index}: {} outputs skipped", skipped.len());
            }
            self.progress_manager.advance(time);
        }

        recorder.finish()?;
        self.progress_manager.finish();

        log::info!(
            "Analysed {} snapshots in {:.2?}",
            self.cli.snapshots,
            start_time.elapsed()
        );

        Ok(())
    }

    /// Number of snapshots processed so far
    pub fn snapshots_processed(&self) -> u64 {
        self.progress_manager.position()
    }
}
