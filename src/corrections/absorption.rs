/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Path-length absorption correction
//!
//! Depends on the scattering angle and the incidence/diffraction asymmetry
//! angle. Near-symmetric geometries collapse to the Bragg–Brentano limit;
//! the asymmetric branch keeps the IEEE +∞ denominator when the diffracted
//! beam grazes the surface.

use super::errors::{CorrectionError, Result};
use crate::utils::constants::SYMMETRIC_GEOMETRY_THRESHOLD;
use crate::ExecutionStrategy;
use rayon::prelude::*;

/// Absorption correction factors per reflection
///
/// Disallowed reflections (NaN 2θ) propagate NaN factors.
///
/// # Arguments
///
/// * `absorption_coefficient` - Linear absorption coefficient, ≥ 0
/// * `two_theta` - Bragg angles in degrees, NaN where disallowed
/// * `asymmetry_angle` - Incidence/diffraction asymmetry angle in degrees
/// * `wavelength` - Incident wavelength in nm
/// * `strategy` - Serial or parallel evaluation over reflections
///
/// # Returns
///
/// One correction factor per reflection, in input order
pub fn absorption_factors(
    absorption_coefficient: f64,
    two_theta: &[f64],
    asymmetry_angle: f64,
    wavelength: f64,
    strategy: ExecutionStrategy,
) -> Result<Vec<f64>> {
    if !(wavelength > 0.0) || !wavelength.is_finite() {
        return Err(CorrectionError::NonPositiveWavelength(wavelength));
    }
    if absorption_coefficient < 0.0 {
        return Err(CorrectionError::NegativeAbsorptionCoefficient(
            absorption_coefficient,
        ));
    }

    let phi = asymmetry_angle.to_radians();
    let abl = -absorption_coefficient * wavelength;

    let compute = |i: usize| -> f64 {
        let theta = two_theta[i].to_radians() * 0.5;

        if phi.abs() > SYMMETRIC_GEOMETRY_THRESHOLD {
            let c1 = (theta + phi).cos();
            let c2 = (theta - phi).cos();

            let f1 = (abl / c1).exp();
            let f2 = (abl / c2).exp();
            // Grazing diffracted beam: the denominator blows up and the
            // quotient underflows to zero rather than trapping
            let f3 = if c2.abs() > 1e-3 {
                abl * (1.0 - c1 / c2)
            } else {
                f64::INFINITY
            };

            (f1 - f2) / f3
        } else {
            (abl / theta.cos()).exp()
        }
    };

    let factors = match strategy {
        ExecutionStrategy::Sequential => (0..two_theta.len()).map(compute).collect(),
        ExecutionStrategy::Parallel => (0..two_theta.len()).into_par_iter().map(compute).collect(),
    };

    Ok(factors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_coefficient_is_identity() {
        let factors = absorption_factors(
            0.0,
            &[25.0, 40.0, 60.0],
            0.0,
            0.154,
            ExecutionStrategy::Sequential,
        )
        .unwrap();

        for &f in &factors {
            assert_relative_eq!(f, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_symmetric_limit_formula() {
        let mu = 250.0;
        let wavelength = 0.154;
        let tth = 40.0_f64;

        let factors =
            absorption_factors(mu, &[tth], 0.0, wavelength, ExecutionStrategy::Sequential).unwrap();

        let theta = tth.to_radians() * 0.5;
        let expected = (-mu * wavelength / theta.cos()).exp();
        assert_relative_eq!(factors[0], expected, epsilon = 1e-12);
    }

    #[test]
    fn test_asymmetric_branch_approaches_symmetric_at_low_angle() {
        let mu = 50.0;
        let wavelength = 0.154;
        // Small θ keeps the two branches within a fraction of a percent
        let tth = 10.0_f64;

        let symmetric =
            absorption_factors(mu, &[tth], 0.0, wavelength, ExecutionStrategy::Sequential).unwrap()
                [0];
        // Just above the symmetric threshold of 1e-3 rad
        let asymmetric = absorption_factors(
            mu,
            &[tth],
            (2e-3_f64).to_degrees(),
            wavelength,
            ExecutionStrategy::Sequential,
        )
        .unwrap()[0];

        assert_relative_eq!(asymmetric, symmetric, epsilon = 1e-2);
    }

    #[test]
    fn test_grazing_exit_underflows_to_zero() {
        let phi = 0.2_f64;
        // θ − φ a hair under 90°, so cos(θ−φ) is small and positive
        let theta = std::f64::consts::FRAC_PI_2 + phi - 5e-4;
        let tth = (2.0 * theta).to_degrees();

        let factors = absorption_factors(
            100.0,
            &[tth],
            phi.to_degrees(),
            0.154,
            ExecutionStrategy::Sequential,
        )
        .unwrap();

        assert_eq!(factors[0], 0.0);
    }

    #[test]
    fn test_disallowed_reflection_propagates_nan() {
        let factors = absorption_factors(
            250.0,
            &[f64::NAN],
            0.0,
            0.154,
            ExecutionStrategy::Sequential,
        )
        .unwrap();
        assert!(factors[0].is_nan());
    }

    #[test]
    fn test_negative_coefficient_is_rejected() {
        assert!(
            absorption_factors(-1.0, &[25.0], 0.0, 0.154, ExecutionStrategy::Sequential).is_err()
        );
    }
}
