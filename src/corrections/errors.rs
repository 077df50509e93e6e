/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the corrections module

use thiserror::Error;

/// Errors that can occur while evaluating intensity corrections
#[derive(Error, Debug)]
pub enum CorrectionError {
    /// Unit-cell volume must be a positive quantity
    #[error("Unit-cell volume must be positive, got {0}")]
    NonPositiveVolume(f64),

    /// Wavelength must be a positive, finite length
    #[error("Wavelength must be positive, got {0}")]
    NonPositiveWavelength(f64),

    /// A linear absorption coefficient cannot be negative
    #[error("Absorption coefficient must be non-negative, got {0}")]
    NegativeAbsorptionCoefficient(f64),

    /// The raw-intensity array must cover every corrected reflection
    #[error("Raw-intensity array has {got} entries but {needed} reflections are corrected")]
    IntensityLengthMismatch { needed: usize, got: usize },
}

/// A specialized Result type for correction operations
pub type Result<T> = std::result::Result<T, CorrectionError>;
