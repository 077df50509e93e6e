/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the geometry module

use thiserror::Error;

/// Errors that can occur in the geometry module
#[derive(Error, Debug)]
pub enum GeometryError {
    /// Metric tensor is not symmetric within tolerance
    #[error("Metric tensor is not symmetric: |m[{0}][{1}] - m[{1}][{0}]| too large")]
    NotSymmetric(usize, usize),

    /// Metric tensor fails the positive-definiteness test
    #[error("Metric tensor is not positive definite: {0}")]
    NotPositiveDefinite(String),

    /// Unit-cell parameters are outside their physical range
    #[error("Invalid unit cell: {0}")]
    InvalidCell(String),

    /// A reflection index with a non-positive squared reciprocal length
    #[error("Reflection ({0} {1} {2}) has a non-positive squared reciprocal length")]
    DegenerateReflection(i32, i32, i32),

    /// Wavelength must be a positive, finite length
    #[error("Wavelength must be positive, got {0}")]
    NonPositiveWavelength(f64),

    /// Reflection list arrays disagree in length
    #[error("Reflection arrays differ in length: {hkls} hkl triples vs {multiplicities} multiplicities")]
    LengthMismatch { hkls: usize, multiplicities: usize },

    /// Multiplicities count symmetry-equivalent reflections and must be at least 1
    #[error("Reflection {0} has zero multiplicity")]
    ZeroMultiplicity(usize),
}

/// A specialized Result type for geometry operations
pub type Result<T> = std::result::Result<T, GeometryError>;
