//! Error types for topology construction, analysis and output operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all analysis operations
#[derive(Debug)]
pub enum AnalysisError {
    /// Operation requires polygon/edge structure the population kind lacks
    CapabilityMismatch {
        /// Name of the requested operation
        operation: &'static str,
        /// Kind of population the operation was invoked on
        population: &'static str,
    },

    /// Not enough interior cells or neighbour pairs for a statistic
    InsufficientData {
        /// Name of the statistic being computed
        operation: &'static str,
        /// Number of interior cells found
        interior_cells: usize,
        /// Number of interior neighbour pairs found
        pairs: usize,
    },

    /// Statistic is undefined because the attribute has zero variance
    DegenerateStatistic {
        /// Name of the statistic being computed
        operation: &'static str,
        /// Attribute whose variance vanished
        attribute: String,
    },

    /// Required per-cell data item is absent
    MissingAttribute {
        /// Index of the cell missing the item
        cell: usize,
        /// Name of the missing item
        item: String,
    },

    /// Mesh connectivity or node layout is malformed
    InvalidTopology {
        /// Description of what's wrong with the mesh
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapabilityMismatch {
                operation,
                population,
            } => {
                write!(
                    f,
                    "Cannot compute {operation} on a {population} population: polygon topology required"
                )
            }
            Self::InsufficientData {
                operation,
                interior_cells,
                pairs,
            } => {
                write!(
                    f,
                    "Insufficient data for {operation}: {interior_cells} interior cells, {pairs} neighbour pairs"
                )
            }
            Self::DegenerateStatistic {
                operation,
                attribute,
            } => {
                write!(
                    f,
                    "Degenerate statistic in {operation}: {attribute} has zero variance"
                )
            }
            Self::MissingAttribute { cell, item } => {
                write!(f, "Cell {cell} has no data item '{item}'")
            }
            Self::InvalidTopology { reason } => {
                write!(f, "Invalid topology: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl AnalysisError {
    /// Whether the error reports missing or degenerate statistical input
    ///
    /// These are the conditions a recorder may skip for a single sample
    /// without corrupting the rest of the output.
    pub const fn is_statistical(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. } | Self::DegenerateStatistic { .. }
        )
    }
}

/// Convenience type alias for analysis results
pub type Result<T> = std::result::Result<T, AnalysisError>;

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AnalysisError {
    AnalysisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid topology error
pub fn invalid_topology(reason: &impl ToString) -> AnalysisError {
    AnalysisError::InvalidTopology {
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a path
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> AnalysisError {
    AnalysisError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
