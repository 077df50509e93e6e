/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wppf_rs::atoms::{database, AsymmetricSites, Crystal, DispersionPoint, ThermalParameters};
use wppf_rs::corrections::{absorption_factors, extinction_factors};
use wppf_rs::geometry::{bragg_angles, d_spacings, ReflectionSet, UnitCell};
use wppf_rs::scattering::structure_factors;
use wppf_rs::ExecutionStrategy;

const WAVELENGTH: f64 = 0.15406;

fn dispersion(f1: f64) -> Vec<DispersionPoint> {
    vec![
        DispersionPoint {
            wavelength: 0.10,
            f_prime: f1 + 0.4,
            f_double_prime: 0.9,
        },
        DispersionPoint {
            wavelength: 0.18,
            f_prime: f1 - 0.5,
            f_double_prime: 0.6,
        },
    ]
}

fn rock_salt() -> Crystal {
    let na = database::lookup("Na").unwrap().to_atom_type(dispersion(11.0));
    let cl = database::lookup("Cl").unwrap().to_atom_type(dispersion(17.0));

    Crystal::from_unit_cell(
        &UnitCell::cubic(0.5640).unwrap(),
        vec![na, cl],
        vec![1.0, 1.0],
        ThermalParameters::Isotropic(vec![0.15, 0.12]),
        AsymmetricSites::from_positions(&[
            vec![
                [0.0, 0.0, 0.0],
                [0.5, 0.5, 0.0],
                [0.5, 0.0, 0.5],
                [0.0, 0.5, 0.5],
            ],
            vec![
                [0.5, 0.0, 0.0],
                [0.0, 0.5, 0.0],
                [0.0, 0.0, 0.5],
                [0.5, 0.5, 0.5],
            ],
        ]),
    )
    .unwrap()
}

fn reflection_grid(limit: i32) -> ReflectionSet {
    let mut hkls = Vec::new();
    let mut mult = Vec::new();
    for h in 0..=limit {
        for k in 0..=limit {
            for l in 0..=limit {
                if h + k + l > 0 {
                    hkls.push([h, k, l]);
                    mult.push(2);
                }
            }
        }
    }
    ReflectionSet::new(hkls, mult).unwrap()
}

fn structure_factor_benchmark(c: &mut Criterion) {
    let crystal = rock_salt();
    let refs = reflection_grid(7);
    let mut group = c.benchmark_group("Structure Factors");

    group.bench_function("sequential", |b| {
        b.iter(|| {
            black_box(
                structure_factors(
                    black_box(&crystal),
                    black_box(&refs),
                    WAVELENGTH,
                    1.0,
                    ExecutionStrategy::Sequential,
                )
                .unwrap(),
            )
        })
    });

    group.bench_function("parallel", |b| {
        b.iter(|| {
            black_box(
                structure_factors(
                    black_box(&crystal),
                    black_box(&refs),
                    WAVELENGTH,
                    1.0,
                    ExecutionStrategy::Parallel,
                )
                .unwrap(),
            )
        })
    });

    group.finish();
}

fn correction_benchmark(c: &mut Criterion) {
    let crystal = rock_salt();
    let refs = reflection_grid(7);
    let d = d_spacings(crystal.metric(), refs.hkls()).unwrap();
    let angles = bragg_angles(&d, WAVELENGTH).unwrap();
    let intensities = structure_factors(
        &crystal,
        &refs,
        WAVELENGTH,
        1.0,
        ExecutionStrategy::Sequential,
    )
    .unwrap();

    let mut group = c.benchmark_group("Corrections");

    group.bench_function("extinction", |b| {
        b.iter(|| {
            black_box(
                extinction_factors(
                    refs.hkls(),
                    black_box(&angles.two_theta),
                    crystal.cell_volume(),
                    WAVELENGTH,
                    &intensities.raw,
                    1e-4,
                    1.0,
                    ExecutionStrategy::Sequential,
                )
                .unwrap(),
            )
        })
    });

    group.bench_function("absorption", |b| {
        b.iter(|| {
            black_box(
                absorption_factors(
                    120.0,
                    black_box(&angles.two_theta),
                    2.0,
                    WAVELENGTH,
                    ExecutionStrategy::Sequential,
                )
                .unwrap(),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, structure_factor_benchmark, correction_benchmark);
criterion_main!(benches);
