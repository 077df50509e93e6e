/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Asymmetric-unit site positions and thermal parameters

use crate::utils::constants::EIGHT_PI_SQ;
use ndarray::Array3;
use serde::{Deserialize, Serialize};

/// Fractional coordinates of the asymmetric-unit atoms, per atom type
///
/// Equivalent-atom counts vary between types, so positions live in a
/// fixed-capacity arena of shape (types, capacity, 3) with an explicit
/// per-type count; entries beyond a type's count are unused padding.
#[derive(Debug, Clone, PartialEq)]
pub struct AsymmetricSites {
    positions: Array3<f64>,
    counts: Vec<usize>,
}

impl AsymmetricSites {
    /// Pack per-type position lists into the padded arena
    pub fn from_positions(per_type: &[Vec<[f64; 3]>]) -> Self {
        let n_types = per_type.len();
        let capacity = per_type.iter().map(Vec::len).max().unwrap_or(0).max(1);

        let mut positions = Array3::zeros((n_types, capacity, 3));
        let mut counts = Vec::with_capacity(n_types);

        for (ty, list) in per_type.iter().enumerate() {
            for (k, r) in list.iter().enumerate() {
                positions[[ty, k, 0]] = r[0];
                positions[[ty, k, 1]] = r[1];
                positions[[ty, k, 2]] = r[2];
            }
            counts.push(list.len());
        }

        Self { positions, counts }
    }

    /// Number of atom types (arena rows)
    pub fn type_count(&self) -> usize {
        self.counts.len()
    }

    /// Number of equivalent atoms for one type
    pub fn count(&self, ty: usize) -> usize {
        self.counts[ty]
    }

    /// Fractional position of atom `k` of type `ty`
    pub fn position(&self, ty: usize, k: usize) -> [f64; 3] {
        [
            self.positions[[ty, k, 0]],
            self.positions[[ty, k, 1]],
            self.positions[[ty, k, 2]],
        ]
    }
}

/// Thermal displacement parameters, one entry per atom type
///
/// The isotropic form carries a single scalar per type; the anisotropic
/// form carries a βij tensor per type. The variant is chosen by the
/// dimensionality of the caller's thermal data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ThermalParameters {
    /// One isotropic displacement scalar per atom type
    Isotropic(Vec<f64>),
    /// One anisotropic βij tensor per atom type
    Anisotropic(Vec<[[f64; 3]; 3]>),
}

impl ThermalParameters {
    /// Number of atom types covered
    pub fn type_count(&self) -> usize {
        match self {
            Self::Isotropic(b) => b.len(),
            Self::Anisotropic(b) => b.len(),
        }
    }

    /// Debye–Waller damping exponent for one type at one reflection
    ///
    /// Anisotropic: −(β₀₀g₀² + β₁₁g₁² + β₂₂g₂² + 2(β₀₁g₀g₁ + β₀₂g₀g₂ + β₁₂g₁g₂)).
    /// Isotropic: −8π²·β·s with s in Å⁻².
    pub(crate) fn damping_exponent(&self, ty: usize, g: [i32; 3], s: f64) -> f64 {
        match self {
            Self::Isotropic(b) => -EIGHT_PI_SQ * b[ty] * s,
            Self::Anisotropic(b) => {
                let b = &b[ty];
                let gf = [g[0] as f64, g[1] as f64, g[2] as f64];
                let arg = b[0][0] * gf[0] * gf[0]
                    + b[1][1] * gf[1] * gf[1]
                    + b[2][2] * gf[2] * gf[2]
                    + 2.0 * (b[0][1] * gf[0] * gf[1]
                        + b[0][2] * gf[0] * gf[2]
                        + b[1][2] * gf[1] * gf[2]);
                -arg
            }
        }
    }
}
