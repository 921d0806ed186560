//! Interior population moments and normalised neighbour correlation
//!
//! Statistics are taken over non-boundary cells only. The correlation of an
//! attribute `A` over a neighbour graph is
//!
//! ```text
//! (<A_i * A_j>_pairs - mean^2) / variance
//! ```
//!
//! where mean and variance come from the whole interior population, which
//! makes the quantity dimensionless and comparable across tissues.

use crate::analysis::neighbours::{NeighbourGraph, vertex_neighbours};
use crate::io::configuration::TARGET_AREA_ITEM;
use crate::io::error::{AnalysisError, Result};
use crate::topology::view::PolygonTopologyView;
use rayon::prelude::*;
use std::collections::HashMap;

/// Variance at or below this fraction of the second moment counts as zero
///
/// Shared nodes are merged from independently computed corners, so visually
/// identical cells can differ in area by a few ulps.
pub const DEGENERATE_VARIANCE_TOLERANCE: f64 = 1e-12;

/// Scalar quantity evaluated per cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellAttribute {
    /// Polygon area
    Area,
    /// Polygon perimeter
    Perimeter,
    /// Number of distinct cells sharing a vertex, boundary cells included
    NeighbourCount,
    /// Named cell data item
    DataItem(String),
}

impl CellAttribute {
    /// The cell's target area data item
    pub fn target_area() -> Self {
        Self::DataItem(TARGET_AREA_ITEM.to_string())
    }

    /// Short name used in logs and error messages
    pub fn label(&self) -> &str {
        match self {
            Self::Area => "area",
            Self::Perimeter => "perimeter",
            Self::NeighbourCount => "neighbour count",
            Self::DataItem(name) => name,
        }
    }

    /// Evaluate the attribute for one cell
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MissingAttribute`] if a data item is absent
    pub fn evaluate<V: PolygonTopologyView>(&self, view: &V, cell: usize) -> Result<f64> {
        match self {
            Self::Area => Ok(view.cell_area(cell)),
            Self::Perimeter => Ok(view.cell_perimeter(cell)),
            Self::NeighbourCount => Ok(vertex_neighbours(view, cell).len() as f64),
            Self::DataItem(name) => view.cell_data_item(cell, name),
        }
    }
}

/// Mean and population variance over the interior cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    /// Number of interior cells contributing
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Population variance (divides by the count)
    pub variance: f64,
}

/// Correlation together with the quantities it was derived from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationSummary {
    /// Interior population moments
    pub moments: Moments,
    /// Mean over neighbour pairs of the product of the two attribute values
    pub pair_product_mean: f64,
    /// Normalised neighbour correlation
    pub correlation: f64,
    /// Number of neighbour pairs contributing
    pub pairs: usize,
}

/// Evaluate an attribute on every interior cell, in ascending cell order
fn interior_values<V: PolygonTopologyView>(
    view: &V,
    attribute: &CellAttribute,
) -> Result<Vec<(usize, f64)>> {
    view.interior_cells()
        .into_par_iter()
        .map(|cell| attribute.evaluate(view, cell).map(|value| (cell, value)))
        .collect()
}

fn moments_of(values: &[(usize, f64)], operation: &'static str) -> Result<Moments> {
    if values.is_empty() {
        return Err(AnalysisError::InsufficientData {
            operation,
            interior_cells: 0,
            pairs: 0,
        });
    }

    let count = values.len() as f64;
    let mean = values.iter().map(|(_, value)| value).sum::<f64>() / count;
    let variance = values
        .iter()
        .map(|(_, value)| (value - mean).powi(2))
        .sum::<f64>()
        / count;

    Ok(Moments {
        count: values.len(),
        mean,
        variance,
    })
}

/// Compute the mean and population variance of an attribute over interior cells
///
/// # Errors
///
/// Returns an error if there are no interior cells or the attribute cannot be
/// evaluated on one of them
pub fn mean_and_variance<V: PolygonTopologyView>(
    view: &V,
    attribute: &CellAttribute,
) -> Result<Moments> {
    let values = interior_values(view, attribute)?;
    moments_of(&values, "mean and variance")
}

/// Compute the normalised neighbour correlation of an attribute
///
/// # Errors
///
/// Returns an error if there are no interior cells or pairs, if the interior
/// variance is zero, or if the attribute cannot be evaluated
pub fn correlation<V: PolygonTopologyView>(
    view: &V,
    attribute: &CellAttribute,
    graph: &NeighbourGraph,
) -> Result<f64> {
    correlation_summary(view, attribute, graph).map(|summary| summary.correlation)
}

/// Compute the neighbour correlation along with its underlying statistics
///
/// # Errors
///
/// Returns [`AnalysisError::InsufficientData`] for zero interior cells or
/// zero pairs, [`AnalysisError::DegenerateStatistic`] for zero variance, and
/// propagates attribute evaluation failures
pub fn correlation_summary<V: PolygonTopologyView>(
    view: &V,
    attribute: &CellAttribute,
    graph: &NeighbourGraph,
) -> Result<CorrelationSummary> {
    const OPERATION: &str = "neighbour correlation";

    let values = interior_values(view, attribute)?;
    if values.is_empty() || graph.is_empty() {
        return Err(AnalysisError::InsufficientData {
            operation: OPERATION,
            interior_cells: values.len(),
            pairs: graph.len(),
        });
    }

    let moments = moments_of(&values, OPERATION)?;
    let second_moment = moments.mean.mul_add(moments.mean, moments.variance);
    if moments.variance <= DEGENERATE_VARIANCE_TOLERANCE * second_moment {
        return Err(AnalysisError::DegenerateStatistic {
            operation: OPERATION,
            attribute: attribute.label().to_string(),
        });
    }

    let by_cell: HashMap<usize, f64> = values.into_iter().collect();
    let value_of = |cell: usize| -> Result<f64> {
        by_cell
            .get(&cell)
            .copied()
            .map_or_else(|| attribute.evaluate(view, cell), Ok)
    };

    let mut product_sum = 0.0;
    for pair in graph.pairs() {
        product_sum += value_of(pair.first())? * value_of(pair.second())?;
    }
    let pair_product_mean = product_sum / graph.len() as f64;
    let correlation = moments.mean.mul_add(-moments.mean, pair_product_mean) / moments.variance;

    log::debug!(
        "{} correlation {correlation} over {} interior cells and {} pairs",
        attribute.label(),
        moments.count,
        graph.len()
    );

    Ok(CorrelationSummary {
        moments,
        pair_product_mean,
        correlation,
        pairs: graph.len(),
    })
}
