//! Runs the analyses on each sampled snapshot and appends their rows
//!
//! A recorder owns one series per requested output kind. Correlation rows
//! that cannot be computed for a sample (no interior cells, no pairs, zero
//! variance) are skipped with a warning; no substitute value is written.

use crate::analysis::forces::{ForceDecomposer, MechanicalParameters};
use crate::analysis::neighbours::{NeighbourGraph, build_interior_pairs};
use crate::analysis::statistics::{CellAttribute, correlation_summary};
use crate::analysis::summary::summarise_cells;
use crate::io::configuration::{
    AREA_CORRELATION_FILE, CELL_FORCES_FILE, CELL_PERIMETERS_FILE, NEIGHBOUR_CORRELATION_FILE,
    VERTEX_MODEL_DATA_FILE,
};
use crate::io::error::Result;
use crate::io::writer::{Field, SeriesWriter};
use crate::topology::mesh::VertexMesh;
use crate::topology::population::CellPopulation;
use crate::topology::view::PolygonTopologyView;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const CORRELATION_COLUMNS: &[&str] = &["mean", "variance", "correlation"];
const FORCE_COLUMNS: &[&str] = &["cell", "area", "perimeter", "line_tension", "total"];
const PERIMETER_COLUMNS: &[&str] = &["cell", "perimeter"];
const VERTEX_MODEL_COLUMNS: &[&str] = &[
    "cell",
    "polygon_class",
    "neighbours",
    "area",
    "perimeter",
    "mean_neighbour_area",
    "mean_neighbour_neighbours",
    "boundary",
    "inner_boundary",
];

/// Output series the recorder can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    /// Neighbour correlation of cell area
    AreaCorrelation,
    /// Neighbour correlation of neighbour count
    NeighbourCorrelation,
    /// Per-cell force decomposition
    CellForces,
    /// Per-cell perimeter
    CellPerimeters,
    /// Per-cell polygon summary
    VertexModelData,
}

impl OutputKind {
    /// Every output kind, in file-creation order
    pub const ALL: [Self; 5] = [
        Self::AreaCorrelation,
        Self::NeighbourCorrelation,
        Self::CellForces,
        Self::CellPerimeters,
        Self::VertexModelData,
    ];

    /// File name of the series
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::AreaCorrelation => AREA_CORRELATION_FILE,
            Self::NeighbourCorrelation => NEIGHBOUR_CORRELATION_FILE,
            Self::CellForces => CELL_FORCES_FILE,
            Self::CellPerimeters => CELL_PERIMETERS_FILE,
            Self::VertexModelData => VERTEX_MODEL_DATA_FILE,
        }
    }

    /// Column names following the time column
    pub const fn columns(self) -> &'static [&'static str] {
        match self {
            Self::AreaCorrelation | Self::NeighbourCorrelation => CORRELATION_COLUMNS,
            Self::CellForces => FORCE_COLUMNS,
            Self::CellPerimeters => PERIMETER_COLUMNS,
            Self::VertexModelData => VERTEX_MODEL_COLUMNS,
        }
    }

    fn correlation_attribute(self) -> Option<CellAttribute> {
        match self {
            Self::AreaCorrelation => Some(CellAttribute::Area),
            Self::NeighbourCorrelation => Some(CellAttribute::NeighbourCount),
            _ => None,
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AreaCorrelation => "area correlation",
            Self::NeighbourCorrelation => "neighbour number correlation",
            Self::CellForces => "cell forces",
            Self::CellPerimeters => "cell perimeters",
            Self::VertexModelData => "vertex model data",
        };
        f.write_str(name)
    }
}

/// Appends analysis rows for successive snapshots to one file per output kind
#[derive(Debug)]
pub struct SnapshotRecorder {
    parameters: MechanicalParameters,
    series: Vec<(OutputKind, SeriesWriter<BufWriter<File>>)>,
}

impl SnapshotRecorder {
    /// Create the output files for `kinds` inside `directory`
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or a file cannot be
    /// created
    pub fn create(
        directory: &Path,
        kinds: &[OutputKind],
        parameters: MechanicalParameters,
    ) -> Result<Self> {
        parameters.validate()?;

        let mut series = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            let path = directory.join(kind.file_name());
            series.push((kind, SeriesWriter::create(&path, kind.columns())?));
        }

        log::info!(
            "Recording {} output series into {}",
            series.len(),
            directory.display()
        );

        Ok(Self { parameters, series })
    }

    /// Output kinds being recorded
    pub fn kinds(&self) -> impl Iterator<Item = OutputKind> + '_ {
        self.series.iter().map(|(kind, _)| *kind)
    }

    /// Analyse a snapshot sampled at `time` and append its rows
    ///
    /// Returns the output kinds skipped for this sample because their
    /// statistic was undefined.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is not vertex-based, a required
    /// cell data item is missing, or writing fails
    pub fn record(&mut self, time: f64, population: &CellPopulation) -> Result<Vec<OutputKind>> {
        let mesh = population.as_polygon_view("snapshot recording")?;
        let graph = build_interior_pairs(mesh);
        let mut skipped = Vec::new();

        for (kind, writer) in &mut self.series {
            let recorded = match kind {
                OutputKind::AreaCorrelation | OutputKind::NeighbourCorrelation => {
                    write_correlation(writer, time, mesh, &graph, *kind)?
                }
                OutputKind::CellForces => {
                    write_forces(writer, time, mesh, self.parameters)?;
                    true
                }
                OutputKind::CellPerimeters => {
                    write_perimeters(writer, time, mesh)?;
                    true
                }
                OutputKind::VertexModelData => {
                    write_vertex_model_data(writer, time, mesh)?;
                    true
                }
            };
            if !recorded {
                skipped.push(*kind);
            }
        }

        Ok(skipped)
    }

    /// Flush every series
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be flushed
    pub fn finish(mut self) -> Result<()> {
        for (_, writer) in &mut self.series {
            writer.flush()?;
        }
        Ok(())
    }
}

fn write_correlation<W: Write>(
    writer: &mut SeriesWriter<W>,
    time: f64,
    mesh: &VertexMesh,
    graph: &NeighbourGraph,
    kind: OutputKind,
) -> Result<bool> {
    let Some(attribute) = kind.correlation_attribute() else {
        return Ok(false);
    };

    match correlation_summary(mesh, &attribute, graph) {
        Ok(summary) => {
            writer.write_row(
                time,
                &[
                    Field::Real(summary.moments.mean),
                    Field::Real(summary.moments.variance),
                    Field::Real(summary.correlation),
                ],
            )?;
            Ok(true)
        }
        Err(error) if error.is_statistical() => {
            log::warn!("Skipping {kind} at time {time}: {error}");
            Ok(false)
        }
        Err(error) => Err(error),
    }
}

fn write_forces<W: Write>(
    writer: &mut SeriesWriter<W>,
    time: f64,
    mesh: &VertexMesh,
    parameters: MechanicalParameters,
) -> Result<()> {
    let decomposer = ForceDecomposer::new(mesh, parameters)?;
    for contribution in decomposer.decompose_all()? {
        writer.write_row(
            time,
            &[
                Field::Index(contribution.cell),
                Field::Real(contribution.area),
                Field::Real(contribution.perimeter),
                Field::Real(contribution.line_tension),
                Field::Real(contribution.total),
            ],
        )?;
    }
    Ok(())
}

fn write_perimeters<W: Write>(
    writer: &mut SeriesWriter<W>,
    time: f64,
    mesh: &VertexMesh,
) -> Result<()> {
    for cell in 0..mesh.num_cells() {
        writer.write_row(
            time,
            &[Field::Index(cell), Field::Real(mesh.cell_perimeter(cell))],
        )?;
    }
    Ok(())
}

fn write_vertex_model_data<W: Write>(
    writer: &mut SeriesWriter<W>,
    time: f64,
    mesh: &VertexMesh,
) -> Result<()> {
    for summary in summarise_cells(mesh) {
        writer.write_row(
            time,
            &[
                Field::Index(summary.cell),
                Field::Index(summary.polygon_class),
                Field::Index(summary.neighbours),
                Field::Real(summary.area),
                Field::Real(summary.perimeter),
                Field::Real(summary.mean_neighbour_area),
                Field::Real(summary.mean_neighbour_neighbours),
                Field::Flag(summary.boundary),
                Field::Flag(summary.inner_boundary),
            ],
        )?;
    }
    Ok(())
}
