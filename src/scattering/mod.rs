/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Form-factor and structure-factor kernels
//!
//! Evaluates anomalous and total atomic scattering factors per atom type,
//! and reduces them over symmetry-equivalent positions into per-reflection
//! structure-factor intensities.

pub mod errors;
mod form_factor;
mod structure_factor;

pub use errors::{Result, ScatteringError};
pub use form_factor::{anomalous_form_factors, xray_form_factors};
pub use structure_factor::{structure_factors, Intensities};
