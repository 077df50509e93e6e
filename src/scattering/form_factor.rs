/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atomic and anomalous scattering form factors

use super::errors::{Result, ScatteringError};
use crate::atoms::{AtomType, DispersionTables};
use num_complex::Complex64;

/// Anomalous scattering corrections per atom type at one wavelength
///
/// For each type, linearly interpolates f′ and f″ from its dispersion
/// curve (clamping outside the tabulated range) and folds in the
/// relativistic correction and the electron count:
/// re = f′ + frel − Z, im = f″.
///
/// # Arguments
///
/// * `types` - Atom-type table
/// * `tables` - Packed dispersion curves, rows parallel to `types`
/// * `wavelength` - Incident wavelength in nm
///
/// # Returns
///
/// One complex correction per atom type, in table order
pub fn anomalous_form_factors(
    types: &[AtomType],
    tables: &DispersionTables,
    wavelength: f64,
) -> Result<Vec<Complex64>> {
    if !(wavelength > 0.0) || !wavelength.is_finite() {
        return Err(ScatteringError::NonPositiveWavelength(wavelength));
    }
    if tables.type_count() != types.len() {
        return Err(ScatteringError::TypeCountMismatch {
            expected: types.len(),
            got: tables.type_count(),
        });
    }

    types
        .iter()
        .enumerate()
        .map(|(i, ty)| {
            let (f_prime, f_double_prime) = tables.interpolate(i, wavelength)?;
            let re = f_prime + ty.relativistic_correction - ty.atomic_number as f64;
            Ok(Complex64::new(re, f_double_prime))
        })
        .collect()
}

/// Total complex scattering factor of one type at scattering magnitude `s`
///
/// The analytic f₀(s) plus the nuclear Thomson term plus a precomputed
/// anomalous correction. The anomalous part depends only on wavelength, so
/// the structure-factor kernel evaluates it once per call and reuses it
/// across reflections.
pub(crate) fn atomic_form_factor(ty: &AtomType, anomalous: Complex64, s: f64) -> Complex64 {
    let fe = ty.coefficients.evaluate(s);
    Complex64::new(fe + ty.nuclear_thomson, 0.0) + anomalous
}

/// Complex atomic scattering factors per type at one reflection
///
/// # Arguments
///
/// * `types` - Atom-type table
/// * `tables` - Packed dispersion curves, rows parallel to `types`
/// * `wavelength` - Incident wavelength in nm
/// * `s` - Scattering-vector magnitude ¼·gᵗMg·10⁻², in Å⁻²
///
/// # Returns
///
/// One complex scattering factor per atom type, in table order
pub fn xray_form_factors(
    types: &[AtomType],
    tables: &DispersionTables,
    wavelength: f64,
    s: f64,
) -> Result<Vec<Complex64>> {
    let anomalous = anomalous_form_factors(types, tables, wavelength)?;
    Ok(types
        .iter()
        .zip(anomalous)
        .map(|(ty, an)| atomic_form_factor(ty, an, s))
        .collect())
}
