/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use approx::assert_relative_eq;
use rstest::rstest;
use wppf_rs::geometry::{bragg_angles, d_spacings, MetricTensor, ReflectionSet, UnitCell};

#[rstest]
#[case([1, 0, 0], 1.0)]
#[case([1, 1, 0], 2.0)]
#[case([1, 1, 1], 3.0)]
#[case([2, 2, 0], 8.0)]
#[case([3, 1, 1], 11.0)]
fn test_cubic_d_spacing_formula(#[case] hkl: [i32; 3], #[case] h2k2l2: f64) {
    // Cubic cell: d(hkl) = a/√(h²+k²+l²)
    let a = 0.5431;
    let metric = UnitCell::cubic(a).unwrap().reciprocal_metric().unwrap();

    let d = d_spacings(&metric, &[hkl]).unwrap();
    assert_relative_eq!(d[0], a / h2k2l2.sqrt(), epsilon = 1e-12);
}

#[test]
fn test_d_spacing_against_quadratic_form() {
    // A general positive-definite metric: d = 1/√(gᵗMg) exactly
    let m = [
        [6.0, 0.8, 0.3],
        [0.8, 5.0, 0.4],
        [0.3, 0.4, 4.0],
    ];
    let metric = MetricTensor::new(m).unwrap();

    let hkls = [[1, 0, 0], [0, 2, 1], [1, 1, 1], [-2, 1, 3]];
    let d = d_spacings(&metric, &hkls).unwrap();

    for (g, &dsp) in hkls.iter().zip(&d) {
        let gf = [g[0] as f64, g[1] as f64, g[2] as f64];
        let mut q = 0.0;
        for i in 0..3 {
            for j in 0..3 {
                q += gf[i] * m[i][j] * gf[j];
            }
        }
        assert_relative_eq!(dsp, 1.0 / q.sqrt(), epsilon = 1e-12);
    }
}

#[test]
fn test_bragg_condition_boundary() {
    // Disallowed exactly when |λ/2d| > 1
    let d = [0.2, 0.1001, 0.1, 0.0999];
    let angles = bragg_angles(&d, 0.2).unwrap();

    assert!(angles.allowed[0]);
    assert!(angles.allowed[1]);
    assert!(angles.allowed[2]); // sinθ = 1 exactly: backscattering, still allowed
    assert!(!angles.allowed[3]);

    assert_relative_eq!(angles.two_theta[2], 180.0, epsilon = 1e-9);
    assert!(angles.two_theta[3].is_nan());
}

#[test]
fn test_bragg_angle_value() {
    // d = 0.4 nm, λ = 0.154 nm: 2θ = 2·asin(0.154/0.8) in degrees
    let angles = bragg_angles(&[0.4], 0.154).unwrap();
    let expected = 2.0 * (0.154_f64 / 0.8).asin().to_degrees();
    assert_relative_eq!(angles.two_theta[0], expected, epsilon = 1e-12);
}

#[test]
fn test_bragg_angle_monotonic_in_wavelength() {
    let d = [0.4];
    let mut previous = 0.0;
    for wl in [0.05, 0.10, 0.15, 0.20, 0.25] {
        let tth = bragg_angles(&d, wl).unwrap().two_theta[0];
        assert!(tth > previous);
        previous = tth;
    }
}

#[test]
fn test_output_order_matches_input_order() {
    let metric = UnitCell::cubic(0.4).unwrap().reciprocal_metric().unwrap();
    let hkls = vec![[2, 2, 0], [1, 0, 0], [1, 1, 1]];
    let refs = ReflectionSet::new(hkls.clone(), vec![12, 6, 8]).unwrap();

    let d = d_spacings(&metric, refs.hkls()).unwrap();
    // (2,2,0) is the shortest spacing and stays first
    assert!(d[0] < d[1]);
    assert!(d[0] < d[2]);
    assert_relative_eq!(d[1], 0.4, epsilon = 1e-12);
}

#[test]
fn test_triclinic_cell_round_trip() {
    // Reciprocal metric of a low-symmetry cell stays positive definite
    let cell = UnitCell::new(0.52, 0.63, 0.71, 89.0, 97.0, 102.5).unwrap();
    let metric = cell.reciprocal_metric().unwrap();

    let d = d_spacings(&metric, &[[1, 0, 0], [0, 1, 0], [0, 0, 1]]).unwrap();
    for &dsp in &d {
        assert!(dsp > 0.0 && dsp.is_finite());
    }
}
