/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Interplanar spacings and Bragg angles for reflection lists

use super::errors::{GeometryError, Result};
use super::metric::MetricTensor;
use serde::{Deserialize, Serialize};

/// An ordered list of reflections with their symmetry multiplicities
///
/// Index order is preserved end-to-end: every per-reflection output array
/// produced by the kernels is parallel to this list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionSet {
    hkls: Vec<[i32; 3]>,
    multiplicities: Vec<u32>,
}

impl ReflectionSet {
    /// Create a reflection set, validating index correspondence
    ///
    /// # Arguments
    ///
    /// * `hkls` - Integer reflection indices
    /// * `multiplicities` - Symmetry-equivalent counts, one per reflection
    ///
    /// # Returns
    ///
    /// The validated set, or an error if lengths disagree or a multiplicity
    /// is zero
    pub fn new(hkls: Vec<[i32; 3]>, multiplicities: Vec<u32>) -> Result<Self> {
        if hkls.len() != multiplicities.len() {
            return Err(GeometryError::LengthMismatch {
                hkls: hkls.len(),
                multiplicities: multiplicities.len(),
            });
        }
        if let Some(idx) = multiplicities.iter().position(|&m| m == 0) {
            return Err(GeometryError::ZeroMultiplicity(idx));
        }
        Ok(Self {
            hkls,
            multiplicities,
        })
    }

    /// Number of reflections
    pub fn len(&self) -> usize {
        self.hkls.len()
    }

    /// Whether the set contains no reflections
    pub fn is_empty(&self) -> bool {
        self.hkls.is_empty()
    }

    /// The reflection indices
    pub fn hkls(&self) -> &[[i32; 3]] {
        &self.hkls
    }

    /// The symmetry multiplicities, parallel to `hkls`
    pub fn multiplicities(&self) -> &[u32] {
        &self.multiplicities
    }
}

/// Bragg angles with their geometric accessibility flags
///
/// A reflection whose Bragg condition cannot be met at the given wavelength
/// carries `two_theta = NaN` and `allowed = false`; this is an expected
/// outcome for high-angle reflections, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct BraggAngles {
    /// Diffraction angle 2θ in degrees, NaN where disallowed
    pub two_theta: Vec<f64>,
    /// Whether the reflection is geometrically accessible
    pub allowed: Vec<bool>,
}

/// Interplanar spacing d = 1/√(gᵗ·M·g) for each reflection, in nm
///
/// # Arguments
///
/// * `metric` - The reciprocal metric tensor
/// * `hkls` - Reflection indices
///
/// # Returns
///
/// One d-spacing per reflection, in input order, or an error for an index
/// with a non-positive squared reciprocal length (only the null index, for
/// a positive-definite metric)
pub fn d_spacings(metric: &MetricTensor, hkls: &[[i32; 3]]) -> Result<Vec<f64>> {
    hkls.iter()
        .map(|&g| {
            let q = metric.quadratic_form(g);
            if q <= 0.0 {
                return Err(GeometryError::DegenerateReflection(g[0], g[1], g[2]));
            }
            Ok(1.0 / q.sqrt())
        })
        .collect()
}

/// Bragg angle 2θ = 2·asin(λ/2d) in degrees for each d-spacing
///
/// # Arguments
///
/// * `d` - Interplanar spacings in nm
/// * `wavelength` - Incident wavelength in nm
///
/// # Returns
///
/// Angles and accessibility flags, in input order; |λ/2d| > 1 marks the
/// reflection disallowed (NaN angle, flag false) without raising an error
pub fn bragg_angles(d: &[f64], wavelength: f64) -> Result<BraggAngles> {
    if !(wavelength > 0.0) || !wavelength.is_finite() {
        return Err(GeometryError::NonPositiveWavelength(wavelength));
    }

    let mut two_theta = Vec::with_capacity(d.len());
    let mut allowed = Vec::with_capacity(d.len());

    for &dsp in d {
        let sth = wavelength / (2.0 * dsp);
        if sth.abs() <= 1.0 {
            two_theta.push(2.0 * sth.asin().to_degrees());
            allowed.push(true);
        } else {
            two_theta.push(f64::NAN);
            allowed.push(false);
        }
    }

    Ok(BraggAngles { two_theta, allowed })
}
