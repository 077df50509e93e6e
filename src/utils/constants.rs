/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Physical constants used in powder pattern calculations

use std::f64::consts::PI;

/// Converts a squared reciprocal length from nm⁻² to Å⁻².
///
/// Lattice metrics and wavelengths are carried in nanometres, while the
/// analytic scattering-coefficient b-parameters are tabulated in Å².
pub const RECIP_NM_SQ_TO_RECIP_ANGSTROM_SQ: f64 = 1e-2;

/// Debye–Waller prefactor 8π² for the isotropic thermal damping exponent
pub const EIGHT_PI_SQ: f64 = 8.0 * PI * PI;

/// Electron mass in unified atomic mass units (mₑ/u)
pub const ELECTRON_MASS_U: f64 = 5.48579909e-4;

/// Threshold (radians) below which the incidence geometry is treated as
/// symmetric Bragg–Brentano
pub const SYMMETRIC_GEOMETRY_THRESHOLD: f64 = 1e-3;
