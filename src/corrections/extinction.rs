/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Primary-extinction correction
//!
//! Combines a Bragg-region and a Laue-region analytic model, selected per
//! reflection by the dimensionless parameter x. The two series are the
//! standard approximations on either side of x = 1 and are not continuous
//! at the boundary; both are kept term-for-term.

use super::errors::{CorrectionError, Result};
use crate::ExecutionStrategy;
use rayon::prelude::*;
use std::f64::consts::PI;

/// Dimensionless extinction parameter for one reflection
fn x_factor(k: f64, cell_volume: f64, wavelength: f64, f_sqr: f64, d: f64) -> f64 {
    f_sqr * (k * wavelength * d / cell_volume).powi(2)
}

/// Bragg-region extinction term
fn bragg_factor(x: f64, two_theta: f64) -> f64 {
    let stth = (two_theta * 0.5).to_radians().sin().powi(2);
    stth / (1.0 + x).sqrt()
}

/// Laue-region extinction term
fn laue_factor(x: f64, two_theta: f64) -> f64 {
    let ctth = (two_theta * 0.5).to_radians().cos().powi(2);
    let el = if x <= 1.0 {
        1.0 - 0.5 * x + 0.25 * x * x - (5.0 / 48.0) * x.powi(3) + (7.0 / 192.0) * x.powi(4)
    } else {
        (2.0 / (PI * x)).powi(2)
            * (1.0 - 0.125 * x * x - (3.0 / 128.0) * x * x - (15.0 / 1024.0) * x.powi(3))
    };
    el * ctth
}

/// Primary-extinction correction factors per reflection
///
/// Covers min(len(hkls), len(two_theta)) reflections. Disallowed
/// reflections (NaN 2θ) propagate NaN factors.
///
/// # Arguments
///
/// * `hkls` - Reflection indices (bounds the corrected count)
/// * `two_theta` - Bragg angles in degrees, NaN where disallowed
/// * `cell_volume` - Unit-cell volume in nm³
/// * `wavelength` - Incident wavelength in nm
/// * `raw_intensity_sq` - Raw |F|² per reflection
/// * `k` - Extinction-model coefficient K
/// * `d` - Extinction-model coefficient D (effective domain size)
/// * `strategy` - Serial or parallel evaluation over reflections
///
/// # Returns
///
/// One correction factor per covered reflection, in input order
#[allow(clippy::too_many_arguments)]
pub fn extinction_factors(
    hkls: &[[i32; 3]],
    two_theta: &[f64],
    cell_volume: f64,
    wavelength: f64,
    raw_intensity_sq: &[f64],
    k: f64,
    d: f64,
    strategy: ExecutionStrategy,
) -> Result<Vec<f64>> {
    if !(cell_volume > 0.0) || !cell_volume.is_finite() {
        return Err(CorrectionError::NonPositiveVolume(cell_volume));
    }
    if !(wavelength > 0.0) || !wavelength.is_finite() {
        return Err(CorrectionError::NonPositiveWavelength(wavelength));
    }

    let nref = hkls.len().min(two_theta.len());
    if raw_intensity_sq.len() < nref {
        return Err(CorrectionError::IntensityLengthMismatch {
            needed: nref,
            got: raw_intensity_sq.len(),
        });
    }

    let compute = |i: usize| -> f64 {
        let x = x_factor(k, cell_volume, wavelength, raw_intensity_sq[i], d);
        let t = two_theta[i];
        bragg_factor(x, t) + laue_factor(x, t)
    };

    let factors = match strategy {
        ExecutionStrategy::Sequential => (0..nref).map(compute).collect(),
        ExecutionStrategy::Parallel => (0..nref).into_par_iter().map(compute).collect(),
    };

    Ok(factors)
}
