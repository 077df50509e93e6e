/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atom-type scattering data
//!
//! Each distinct chemical/ionic species carries an 11-parameter analytic
//! scattering-coefficient set, a nuclear Thomson correction, a relativistic
//! correction, and an anomalous-dispersion curve. Dispersion curves vary in
//! length between species, so they are packed into a fixed-capacity arena
//! with an explicit valid-length per row.

use super::errors::{AtomError, Result};
use crate::utils::{interp_clamped, UtilsError};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Analytic atomic scattering-factor coefficients
///
/// The five-Gaussian parameterization
/// f₀(s) = c + Σⱼ aⱼ·exp(−bⱼ·s), with s in Å⁻² and bⱼ in Å².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatteringCoefficients {
    pub a: [f64; 5],
    pub c: f64,
    pub b: [f64; 5],
}

impl ScatteringCoefficients {
    /// Unpack the flat 11-parameter layout a₁..a₅ | c | b₁..b₅
    pub fn from_row(row: [f64; 11]) -> Self {
        Self {
            a: [row[0], row[1], row[2], row[3], row[4]],
            c: row[5],
            b: [row[6], row[7], row[8], row[9], row[10]],
        }
    }

    /// Evaluate f₀ at scattering-vector magnitude `s` (Å⁻²)
    pub fn evaluate(&self, s: f64) -> f64 {
        let mut fe = self.c;
        for j in 0..5 {
            fe += self.a[j] * (-self.b[j] * s).exp();
        }
        fe
    }
}

/// One sample of an anomalous-dispersion curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DispersionPoint {
    /// Wavelength in nm
    pub wavelength: f64,
    /// Real dispersion correction f′
    pub f_prime: f64,
    /// Imaginary dispersion correction f″
    pub f_double_prime: f64,
}

/// Scattering description of one distinct chemical/ionic species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomType {
    /// Atomic number Z
    pub atomic_number: u32,
    /// Analytic scattering-factor coefficients
    pub coefficients: ScatteringCoefficients,
    /// Nuclear Thomson correction
    pub nuclear_thomson: f64,
    /// Relativistic correction to the forward scattering factor
    pub relativistic_correction: f64,
    /// Anomalous-dispersion curve, sorted by ascending wavelength
    pub dispersion: Vec<DispersionPoint>,
}

/// Anomalous-dispersion curves packed into a fixed-capacity arena
///
/// One row per atom type, each padded to the longest curve; `lengths[i]`
/// marks the valid prefix of row i. Rows are contiguous, so per-type curve
/// access is O(1) with no nested allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct DispersionTables {
    wavelengths: Array2<f64>,
    f_prime: Array2<f64>,
    f_double_prime: Array2<f64>,
    lengths: Vec<usize>,
}

impl DispersionTables {
    /// Pack per-type curves into the padded arena
    ///
    /// # Arguments
    ///
    /// * `types` - Atom types whose `dispersion` curves are packed, in order
    ///
    /// # Returns
    ///
    /// The arena, or an error naming a type with an empty curve
    pub fn from_atom_types(types: &[AtomType]) -> Result<Self> {
        let n_types = types.len();
        let mut capacity = 0;
        for (i, ty) in types.iter().enumerate() {
            if ty.dispersion.is_empty() {
                return Err(AtomError::EmptyDispersionCurve(i));
            }
            capacity = capacity.max(ty.dispersion.len());
        }

        let mut wavelengths = Array2::zeros((n_types, capacity));
        let mut f_prime = Array2::zeros((n_types, capacity));
        let mut f_double_prime = Array2::zeros((n_types, capacity));
        let mut lengths = Vec::with_capacity(n_types);

        for (i, ty) in types.iter().enumerate() {
            for (k, point) in ty.dispersion.iter().enumerate() {
                wavelengths[[i, k]] = point.wavelength;
                f_prime[[i, k]] = point.f_prime;
                f_double_prime[[i, k]] = point.f_double_prime;
            }
            lengths.push(ty.dispersion.len());
        }

        Ok(Self {
            wavelengths,
            f_prime,
            f_double_prime,
            lengths,
        })
    }

    /// Number of atom types (arena rows)
    pub fn type_count(&self) -> usize {
        self.lengths.len()
    }

    /// Valid curve length for one atom type
    pub fn curve_len(&self, ty: usize) -> usize {
        self.lengths[ty]
    }

    /// Interpolate (f′, f″) at `wavelength` for one atom type
    ///
    /// Linear interpolation over the row's valid prefix; wavelengths outside
    /// the curve clamp to the boundary samples.
    pub fn interpolate(
        &self,
        ty: usize,
        wavelength: f64,
    ) -> std::result::Result<(f64, f64), UtilsError> {
        let n = self.lengths[ty];
        let xs = self.wavelengths.row(ty);
        let xs = xs.slice(ndarray::s![..n]);
        let fp = interp_clamped(wavelength, xs, self.f_prime.row(ty).slice(ndarray::s![..n]))?;
        let fpp = interp_clamped(
            wavelength,
            xs,
            self.f_double_prime.row(ty).slice(ndarray::s![..n]),
        )?;
        Ok((fp, fpp))
    }
}
