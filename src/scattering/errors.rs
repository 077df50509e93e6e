/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the scattering module

use crate::utils::UtilsError;
use thiserror::Error;

/// Errors that can occur while evaluating form and structure factors
#[derive(Error, Debug)]
pub enum ScatteringError {
    /// Wavelength must be a positive, finite length
    #[error("Wavelength must be positive, got {0}")]
    NonPositiveWavelength(f64),

    /// Atom-type table and dispersion arena disagree in row count
    #[error("Dispersion arena has {got} rows for {expected} atom types")]
    TypeCountMismatch { expected: usize, got: usize },

    /// Interpolating a dispersion curve failed
    #[error(transparent)]
    Interpolation(#[from] UtilsError),

    /// Every weighted intensity is zero, so no peak can be scaled to 100
    #[error("All weighted intensities are zero; normalization is undefined")]
    AllIntensitiesZero,
}

/// A specialized Result type for scattering operations
pub type Result<T> = std::result::Result<T, ScatteringError>;
