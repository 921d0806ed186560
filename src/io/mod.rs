//! Input/output operations, configuration and error handling

/// Command-line driver
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Snapshot progress display
pub mod progress;
/// Per-snapshot analysis recording
pub mod recorder;
/// Tab-separated time series output
pub mod writer;
