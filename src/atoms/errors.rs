/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the atoms module

use thiserror::Error;

/// Errors that can occur while assembling crystal-structure inputs
#[derive(Error, Debug)]
pub enum AtomError {
    /// Site occupancy must be a fraction in [0, 1]
    #[error("Occupancy for atom type {index} must lie in [0, 1], got {value}")]
    OccupancyOutOfRange { index: usize, value: f64 },

    /// Atom-type-indexed arrays must share one length
    #[error("Atom-type array lengths disagree: {what} has {got} entries, expected {expected}")]
    TypeCountMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// An anomalous-dispersion curve with no valid entries cannot be interpolated
    #[error("Atom type {0} has an empty anomalous-dispersion curve")]
    EmptyDispersionCurve(usize),

    /// Unit-cell volume must be a positive quantity
    #[error("Unit-cell volume must be positive, got {0}")]
    NonPositiveVolume(f64),

    /// A structure with no atom types has nothing to scatter
    #[error("Crystal has no atom types")]
    NoAtomTypes,

    /// Lattice-parameter inputs failed geometric validation
    #[error(transparent)]
    Geometry(#[from] crate::geometry::GeometryError),
}

/// A specialized Result type for atoms operations
pub type Result<T> = std::result::Result<T, AtomError>;
