/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Embedded element scattering data
//!
//! Analytic scattering-factor coefficients and atomic masses for common
//! elements, so callers can assemble atom types without shipping their own
//! coefficient tables. The entries use the standard published four-Gaussian
//! sets, padded with a zero fifth term to the five-term evaluation layout.

use super::types::{AtomType, DispersionPoint, ScatteringCoefficients};
use crate::utils::constants::ELECTRON_MASS_U;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Scattering data for one neutral element
#[derive(Debug, Clone, Copy)]
pub struct ElementRecord {
    pub symbol: &'static str,
    pub atomic_number: u32,
    /// Atomic mass in unified atomic mass units
    pub atomic_mass: f64,
    pub coefficients: ScatteringCoefficients,
}

impl ElementRecord {
    /// Build an atom type from this record and a dispersion curve
    ///
    /// The nuclear Thomson term is derived from Z and the atomic mass; the
    /// relativistic correction defaults to zero and may be overridden by
    /// the caller afterwards.
    pub fn to_atom_type(&self, dispersion: Vec<DispersionPoint>) -> AtomType {
        AtomType {
            atomic_number: self.atomic_number,
            coefficients: self.coefficients,
            nuclear_thomson: nuclear_thomson(self.atomic_number, self.atomic_mass),
            relativistic_correction: 0.0,
            dispersion,
        }
    }
}

/// Nuclear Thomson correction −Z²·(mₑ/u)/A for an element
pub fn nuclear_thomson(atomic_number: u32, atomic_mass: f64) -> f64 {
    let z = atomic_number as f64;
    -z * z * ELECTRON_MASS_U / atomic_mass
}

fn record(
    symbol: &'static str,
    atomic_number: u32,
    atomic_mass: f64,
    a: [f64; 4],
    b: [f64; 4],
    c: f64,
) -> ElementRecord {
    ElementRecord {
        symbol,
        atomic_number,
        atomic_mass,
        coefficients: ScatteringCoefficients {
            a: [a[0], a[1], a[2], a[3], 0.0],
            c,
            b: [b[0], b[1], b[2], b[3], 0.0],
        },
    }
}

static ELEMENTS: Lazy<HashMap<&'static str, ElementRecord>> = Lazy::new(|| {
    let records = [
        record(
            "C",
            6,
            12.011,
            [2.31, 1.02, 1.5886, 0.865],
            [20.8439, 10.2075, 0.5687, 51.6512],
            0.2156,
        ),
        record(
            "N",
            7,
            14.007,
            [12.2126, 3.1322, 2.0125, 1.1663],
            [0.0057, 9.8933, 28.9975, 0.5826],
            -11.529,
        ),
        record(
            "O",
            8,
            15.999,
            [3.0485, 2.2868, 1.5463, 0.867],
            [13.2771, 5.7011, 0.3239, 32.9089],
            0.2508,
        ),
        record(
            "Na",
            11,
            22.9898,
            [4.7626, 3.1736, 1.2674, 1.1128],
            [3.285, 8.8422, 0.3136, 129.424],
            0.676,
        ),
        record(
            "Al",
            13,
            26.9815,
            [6.4202, 1.9002, 1.5936, 1.9646],
            [3.0387, 0.7426, 31.5472, 85.0886],
            1.1151,
        ),
        record(
            "Si",
            14,
            28.0855,
            [6.2915, 3.0353, 1.9891, 1.541],
            [2.4386, 32.3337, 0.6785, 81.6937],
            1.1407,
        ),
        record(
            "Cl",
            17,
            35.453,
            [11.4604, 7.1964, 6.2556, 1.6455],
            [0.0104, 1.1662, 18.5194, 47.7784],
            -9.5574,
        ),
        record(
            "Ca",
            20,
            40.078,
            [8.6266, 7.3873, 1.5899, 1.0211],
            [10.4421, 0.6599, 85.7484, 178.437],
            1.3751,
        ),
        record(
            "Fe",
            26,
            55.845,
            [11.7695, 7.3573, 3.5222, 2.3045],
            [4.7611, 0.3072, 15.3535, 76.8805],
            1.0369,
        ),
        record(
            "Cu",
            29,
            63.546,
            [13.338, 7.1676, 5.6158, 1.6735],
            [3.5828, 0.247, 11.3966, 64.8126],
            1.191,
        ),
    ];

    records.into_iter().map(|r| (r.symbol, r)).collect()
});

/// Look up an element's scattering record by symbol
pub fn lookup(symbol: &str) -> Option<&'static ElementRecord> {
    ELEMENTS.get(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_elements_are_present() {
        for symbol in ["C", "O", "Si", "Fe", "Cu"] {
            assert!(lookup(symbol).is_some(), "missing element {}", symbol);
        }
        assert!(lookup("Xx").is_none());
    }

    #[test]
    fn test_forward_scattering_approximates_z() {
        // f₀(0) = Σa + c ≈ Z for a neutral atom
        for record in ELEMENTS.values() {
            let f0 = record.coefficients.evaluate(0.0);
            assert!(
                (f0 - record.atomic_number as f64).abs() < 0.05,
                "{}: f0(0) = {} vs Z = {}",
                record.symbol,
                f0,
                record.atomic_number
            );
        }
    }

    #[test]
    fn test_nuclear_thomson_is_small_and_negative() {
        let fnt = nuclear_thomson(14, 28.0855);
        assert!(fnt < 0.0);
        assert!(fnt.abs() < 0.01);
    }

    #[test]
    fn test_atom_type_from_record() {
        let si = lookup("Si").unwrap();
        let ty = si.to_atom_type(vec![DispersionPoint {
            wavelength: 0.154,
            f_prime: 0.25,
            f_double_prime: 0.33,
        }]);

        assert_eq!(ty.atomic_number, 14);
        assert!(ty.nuclear_thomson < 0.0);
        assert_eq!(ty.dispersion.len(), 1);
    }
}
