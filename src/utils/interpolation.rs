/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Linear interpolation over tabulated curves
//!
//! Anomalous-dispersion curves are stored as padded arena rows, so the
//! interpolation routines operate on `ndarray` views rather than slices.

use super::errors::{Result, UtilsError};
use ndarray::ArrayView1;

/// Linear interpolation on a tabulated function with clamped ends
///
/// Outside the tabulated range the boundary value is returned, matching
/// the behavior expected for dispersion curves sampled only around the
/// wavelengths of interest.
///
/// # Arguments
///
/// * `x` - The abscissa at which to interpolate
/// * `xs` - Tabulated abscissas, sorted in ascending order
/// * `ys` - Tabulated ordinates
///
/// # Returns
///
/// The interpolated value at `x`, or an error if the table is empty or the
/// lengths disagree
pub fn interp_clamped(x: f64, xs: ArrayView1<'_, f64>, ys: ArrayView1<'_, f64>) -> Result<f64> {
    if xs.len() != ys.len() {
        return Err(UtilsError::Interpolation(format!(
            "abscissa and ordinate tables differ in length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }

    let n = xs.len();
    if n == 0 {
        return Err(UtilsError::Interpolation(
            "empty table provided for interpolation".to_string(),
        ));
    }

    // Clamp at the boundaries (also covers the single-point table)
    if x <= xs[0] {
        return Ok(ys[0]);
    }
    if x >= xs[n - 1] {
        return Ok(ys[n - 1]);
    }

    // Find the first tabulated abscissa greater than x
    let mut idx = n - 1;
    for i in 1..n {
        if xs[i] > x {
            idx = i;
            break;
        }
    }

    let (x0, x1) = (xs[idx - 1], xs[idx]);
    let (y0, y1) = (ys[idx - 1], ys[idx]);

    if (x1 - x0).abs() < 1e-12 {
        return Ok(y0);
    }

    let t = (x - x0) / (x1 - x0);
    Ok(y0 * (1.0 - t) + y1 * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_interior_interpolation() {
        let xs = array![0.0, 1.0, 2.0];
        let ys = array![0.0, 10.0, 40.0];

        assert_relative_eq!(
            interp_clamped(0.5, xs.view(), ys.view()).unwrap(),
            5.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            interp_clamped(1.5, xs.view(), ys.view()).unwrap(),
            25.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_clamped_ends() {
        let xs = array![1.0, 2.0];
        let ys = array![3.0, 7.0];

        assert_relative_eq!(
            interp_clamped(0.0, xs.view(), ys.view()).unwrap(),
            3.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            interp_clamped(9.0, xs.view(), ys.view()).unwrap(),
            7.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_single_point_table() {
        let xs = array![1.54];
        let ys = array![26.0];

        assert_relative_eq!(
            interp_clamped(0.7, xs.view(), ys.view()).unwrap(),
            26.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let xs = ndarray::Array1::<f64>::zeros(0);
        let ys = ndarray::Array1::<f64>::zeros(0);

        assert!(interp_clamped(1.0, xs.view(), ys.view()).is_err());
    }
}
