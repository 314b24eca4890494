//! Domain model for nesting rectangular and circular parts onto fixed-size stock sheets:
//! parts, placements, sheets, results and their utilization metrics.

/// Parts, placements, sheets and results of a nesting run
pub mod entities;

/// Geometric primitives
pub mod geometry;

/// Utilization metrics of sheets and results
pub mod metrics;

/// Importing part lists into and exporting results out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
