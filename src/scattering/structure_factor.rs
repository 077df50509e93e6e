/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Structure-factor intensities per reflection
//!
//! The central reduction of the crate: for every reflection, a complex sum
//! over atom types and their symmetry-equivalent positions, damped by
//! occupancy and thermal motion, reduced to |F|², weighted by multiplicity
//! and normalized so the strongest peak is 100.

use super::errors::{Result, ScatteringError};
use super::form_factor::{anomalous_form_factors, atomic_form_factor};
use crate::atoms::Crystal;
use crate::geometry::ReflectionSet;
use crate::utils::constants::RECIP_NM_SQ_TO_RECIP_ANGSTROM_SQ;
use crate::ExecutionStrategy;
use log::debug;
use num_complex::Complex64;
use rayon::prelude::*;
use std::f64::consts::PI;

/// Per-reflection intensities, parallel to the input reflection list
#[derive(Debug, Clone, PartialEq)]
pub struct Intensities {
    /// Weighted intensities scaled so the strongest reflection is 100
    pub normalized: Vec<f64>,
    /// Raw squared structure-factor magnitudes |F|²
    pub raw: Vec<f64>,
}

/// Structure-factor intensities for a reflection list
///
/// Reflections are independent of one another, so the reduction runs as a
/// parallel map when the strategy asks for it; only the final max-based
/// normalization synchronizes across reflections.
///
/// # Arguments
///
/// * `crystal` - Validated crystal structure
/// * `reflections` - Reflection indices with multiplicities
/// * `wavelength` - Incident wavelength in nm
/// * `intensity_weight` - Global weighting factor applied before normalization
/// * `strategy` - Serial or parallel reduction over reflections
///
/// # Returns
///
/// Normalized and raw intensities in reflection order, or an error if the
/// wavelength is invalid or every weighted intensity is zero
pub fn structure_factors(
    crystal: &Crystal,
    reflections: &ReflectionSet,
    wavelength: f64,
    intensity_weight: f64,
    strategy: ExecutionStrategy,
) -> Result<Intensities> {
    if !(wavelength > 0.0) || !wavelength.is_finite() {
        return Err(ScatteringError::NonPositiveWavelength(wavelength));
    }

    // The anomalous correction depends only on wavelength; evaluate it once
    // and reuse it for every reflection.
    let anomalous = anomalous_form_factors(crystal.atom_types(), crystal.dispersion(), wavelength)?;

    debug!(
        "structure factors: {} reflections, {} atom types, {:?} strategy",
        reflections.len(),
        crystal.type_count(),
        strategy
    );

    let compute = |i: usize| -> (f64, f64) {
        let g = reflections.hkls()[i];
        let multiplicity = reflections.multiplicities()[i] as f64;

        let glen = crystal.metric().quadratic_form(g);
        let s = 0.25 * glen * RECIP_NM_SQ_TO_RECIP_ANGSTROM_SQ;

        let gf = [g[0] as f64, g[1] as f64, g[2] as f64];
        let mut total = Complex64::new(0.0, 0.0);

        for (ty_idx, ty) in crystal.atom_types().iter().enumerate() {
            let thermal = crystal.thermal().damping_exponent(ty_idx, g, s).exp();
            let ff = atomic_form_factor(ty, anomalous[ty_idx], s)
                * crystal.occupancy()[ty_idx]
                * thermal;

            for k in 0..crystal.sites().count(ty_idx) {
                let r = crystal.sites().position(ty_idx, k);
                let phase = 2.0 * PI * (gf[0] * r[0] + gf[1] * r[1] + gf[2] * r[2]);
                total += ff * Complex64::new(phase.cos(), -phase.sin());
            }
        }

        let raw = total.norm_sqr();
        (intensity_weight * multiplicity * raw, raw)
    };

    let pairs: Vec<(f64, f64)> = match strategy {
        ExecutionStrategy::Sequential => (0..reflections.len()).map(compute).collect(),
        ExecutionStrategy::Parallel => (0..reflections.len()).into_par_iter().map(compute).collect(),
    };

    let (weighted, raw): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();

    // Barrier: the scale factor needs every weighted value
    let max = weighted.iter().cloned().fold(0.0_f64, f64::max);
    if !(max > 0.0) {
        return Err(ScatteringError::AllIntensitiesZero);
    }

    let normalized = weighted.iter().map(|&w| 100.0 * w / max).collect();

    Ok(Intensities { normalized, raw })
}
