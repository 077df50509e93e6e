/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! End-to-end example: per-reflection scattering table for fcc copper
//!
//! Builds the structure from the embedded element database, evaluates the
//! full pipeline and prints the quantities a pattern-synthesis engine would
//! consume.

use anyhow::Result;
use wppf_rs::atoms::{database, AsymmetricSites, Crystal, DispersionPoint, ThermalParameters};
use wppf_rs::geometry::{ReflectionSet, UnitCell};
use wppf_rs::{Experiment, Wppf};

fn main() -> Result<()> {
    env_logger::init();

    // Tabulated f₁/f″ samples around Cu Kα
    let copper = database::lookup("Cu")
        .expect("copper is in the embedded database")
        .to_atom_type(vec![
            DispersionPoint {
                wavelength: 0.10,
                f_prime: 27.8,
                f_double_prime: 0.9,
            },
            DispersionPoint {
                wavelength: 0.18,
                f_prime: 26.9,
                f_double_prime: 0.6,
            },
        ]);

    let crystal = Crystal::from_unit_cell(
        &UnitCell::cubic(0.3615)?,
        vec![copper],
        vec![1.0],
        ThermalParameters::Isotropic(vec![0.2]),
        AsymmetricSites::from_positions(&[vec![
            [0.0, 0.0, 0.0],
            [0.5, 0.5, 0.0],
            [0.5, 0.0, 0.5],
            [0.0, 0.5, 0.5],
        ]]),
    )?;

    let reflections = ReflectionSet::new(
        vec![[1, 1, 1], [2, 0, 0], [2, 2, 0], [3, 1, 1], [2, 2, 2], [4, 0, 0]],
        vec![8, 6, 12, 24, 8, 6],
    )?;

    let experiment = Experiment {
        wavelength: 0.15406,
        intensity_weight: 1.0,
        extinction_k: 1e-4,
        extinction_d: 1.0,
        absorption_coefficient: 120.0,
        asymmetry_angle: 0.0,
    };

    let table = Wppf::new().evaluate(&crystal, &reflections, &experiment)?;

    println!("fcc Cu, λ = {} nm", experiment.wavelength);
    println!(
        "{:>10} {:>9} {:>9} {:>8} {:>11} {:>11}",
        "hkl", "d (nm)", "2θ (°)", "I (rel)", "extinction", "absorption"
    );
    for (i, hkl) in reflections.hkls().iter().enumerate() {
        println!(
            "{:>10} {:>9.4} {:>9.3} {:>8.2} {:>11.6} {:>11.3e}",
            format!("({} {} {})", hkl[0], hkl[1], hkl[2]),
            table.d_spacings[i],
            table.two_theta[i],
            table.normalized_intensity[i],
            table.extinction[i],
            table.absorption[i],
        );
    }

    Ok(())
}
