/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Reciprocal-space metric tensors and unit cells

use super::errors::{GeometryError, Result};
use serde::{Deserialize, Serialize};

/// Symmetric, positive-definite 3×3 tensor encoding reciprocal-lattice
/// geometry, in nm⁻²
///
/// Squared reciprocal-lattice vector lengths are quadratic forms in this
/// tensor: |g*|² = gᵗ·M·g for an integer reflection index g.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricTensor {
    m: [[f64; 3]; 3],
}

impl MetricTensor {
    /// Create a metric tensor, validating symmetry and positive-definiteness
    ///
    /// # Arguments
    ///
    /// * `m` - The 3×3 matrix, row-major
    ///
    /// # Returns
    ///
    /// The validated tensor, or an error describing which invariant failed
    pub fn new(m: [[f64; 3]; 3]) -> Result<Self> {
        let scale = m
            .iter()
            .flatten()
            .fold(0.0_f64, |acc, &v| acc.max(v.abs()));
        let tol = 1e-8 * scale.max(1.0);

        for i in 0..3 {
            for j in (i + 1)..3 {
                if (m[i][j] - m[j][i]).abs() > tol {
                    return Err(GeometryError::NotSymmetric(i, j));
                }
            }
        }

        // Sylvester's criterion: all leading principal minors positive
        let d1 = m[0][0];
        let d2 = m[0][0] * m[1][1] - m[0][1] * m[1][0];
        let d3 = det3(&m);

        if d1 <= 0.0 || d2 <= 0.0 || d3 <= 0.0 {
            return Err(GeometryError::NotPositiveDefinite(format!(
                "leading principal minors {:.6e}, {:.6e}, {:.6e}",
                d1, d2, d3
            )));
        }

        Ok(Self { m })
    }

    /// Evaluate the quadratic form gᵗ·M·g for a reflection index
    pub fn quadratic_form(&self, g: [i32; 3]) -> f64 {
        let gf = [g[0] as f64, g[1] as f64, g[2] as f64];
        let mut total = 0.0;
        for (i, &gi) in gf.iter().enumerate() {
            for (j, &gj) in gf.iter().enumerate() {
                total += gi * self.m[i][j] * gj;
            }
        }
        total
    }

    /// The raw tensor entries, row-major
    pub fn as_array(&self) -> &[[f64; 3]; 3] {
        &self.m
    }
}

/// Unit-cell parameters: edge lengths in nm, angles in degrees
///
/// Provides the reciprocal metric tensor and cell volume the scattering
/// kernels consume, so callers holding lattice parameters need not derive
/// either by hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitCell {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl UnitCell {
    /// Create a unit cell, validating edge lengths and angles
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
        for (name, len) in [("a", a), ("b", b), ("c", c)] {
            if !(len > 0.0) || !len.is_finite() {
                return Err(GeometryError::InvalidCell(format!(
                    "edge {} must be a positive length, got {}",
                    name, len
                )));
            }
        }
        for (name, ang) in [("alpha", alpha), ("beta", beta), ("gamma", gamma)] {
            if !(ang > 0.0 && ang < 180.0) {
                return Err(GeometryError::InvalidCell(format!(
                    "angle {} must lie in (0, 180) degrees, got {}",
                    name, ang
                )));
            }
        }
        Ok(Self {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        })
    }

    /// Create a cubic cell with edge length `a` in nm
    pub fn cubic(a: f64) -> Result<Self> {
        Self::new(a, a, a, 90.0, 90.0, 90.0)
    }

    /// Direct-space metric tensor in nm²
    fn direct_metric(&self) -> [[f64; 3]; 3] {
        let (ca, cb, cg) = (
            self.alpha.to_radians().cos(),
            self.beta.to_radians().cos(),
            self.gamma.to_radians().cos(),
        );
        [
            [self.a * self.a, self.a * self.b * cg, self.a * self.c * cb],
            [self.a * self.b * cg, self.b * self.b, self.b * self.c * ca],
            [self.a * self.c * cb, self.b * self.c * ca, self.c * self.c],
        ]
    }

    /// Unit-cell volume in nm³
    pub fn volume(&self) -> Result<f64> {
        let det = det3(&self.direct_metric());
        if det <= 0.0 {
            return Err(GeometryError::InvalidCell(format!(
                "angles {} / {} / {} do not close a cell",
                self.alpha, self.beta, self.gamma
            )));
        }
        Ok(det.sqrt())
    }

    /// Reciprocal-space metric tensor in nm⁻²
    ///
    /// The inverse of the direct metric, computed in closed form via the
    /// adjugate. The adjugate of a symmetric matrix is symmetric, so the
    /// result passes `MetricTensor::new` revalidation.
    pub fn reciprocal_metric(&self) -> Result<MetricTensor> {
        let g = self.direct_metric();
        let det = det3(&g);
        if det <= 0.0 {
            return Err(GeometryError::InvalidCell(format!(
                "angles {} / {} / {} do not close a cell",
                self.alpha, self.beta, self.gamma
            )));
        }

        let mut inv = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                let (r0, r1) = match i {
                    0 => (1, 2),
                    1 => (0, 2),
                    _ => (0, 1),
                };
                let (c0, c1) = match j {
                    0 => (1, 2),
                    1 => (0, 2),
                    _ => (0, 1),
                };
                let minor = g[r0][c0] * g[r1][c1] - g[r0][c1] * g[r1][c0];
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                // Transposition folds into symmetry of the cofactor matrix
                inv[j][i] = sign * minor / det;
            }
        }

        MetricTensor::new(inv)
    }
}

/// Determinant of a 3×3 matrix
fn det3(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_asymmetric_tensor() {
        let m = [[1.0, 0.5, 0.0], [0.2, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert!(MetricTensor::new(m).is_err());
    }

    #[test]
    fn test_rejects_non_positive_definite_tensor() {
        let m = [[1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]];
        assert!(MetricTensor::new(m).is_err());
    }

    #[test]
    fn test_cubic_reciprocal_metric() {
        let cell = UnitCell::cubic(0.4).unwrap();
        let metric = cell.reciprocal_metric().unwrap();
        let m = metric.as_array();

        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 / 0.16 } else { 0.0 };
                assert_relative_eq!(m[i][j], expected, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_cubic_volume() {
        let cell = UnitCell::cubic(0.4).unwrap();
        assert_relative_eq!(cell.volume().unwrap(), 0.064, epsilon = 1e-12);
    }

    #[test]
    fn test_hexagonal_volume() {
        // V = a²c·sin(120°)
        let cell = UnitCell::new(0.3, 0.3, 0.5, 90.0, 90.0, 120.0).unwrap();
        let expected = 0.3 * 0.3 * 0.5 * (120.0_f64).to_radians().sin();
        assert_relative_eq!(cell.volume().unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_quadratic_form_counts_cross_terms() {
        let m = [[2.0, 0.5, 0.0], [0.5, 3.0, 0.0], [0.0, 0.0, 1.0]];
        let metric = MetricTensor::new(m).unwrap();
        // g = (1, 1, 0): 2 + 3 + 2·0.5 = 6
        assert_relative_eq!(metric.quadratic_form([1, 1, 0]), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_flat_cell() {
        assert!(UnitCell::new(0.3, 0.3, 0.3, 60.0, 60.0, 179.0).is_err() ||
            UnitCell::new(0.3, 0.3, 0.3, 60.0, 60.0, 179.0)
                .unwrap()
                .volume()
                .is_err());
    }
}
