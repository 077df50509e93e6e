/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # wppf-rs
//!
//! X-ray scattering kernels for whole powder pattern fitting.
//!
//! Given a crystal structure and an experiment configuration, this crate
//! computes the per-reflection quantities a pattern-synthesis engine
//! consumes: interplanar spacings, Bragg angles, complex atomic and
//! anomalous form factors, structure-factor intensities, and
//! primary-extinction and path-length-absorption correction factors.
//!
//! All kernels are pure functions over immutable inputs. Reflections are
//! independent of one another, so the hot reductions run either serially or
//! as rayon parallel maps, selected by [`ExecutionStrategy`].
//!
//! Units: lengths in nanometres (wavelengths, d-spacings, cell edges),
//! reciprocal metrics in nm⁻², angles in degrees at the API boundary.

pub mod atoms;
pub mod corrections;
pub mod geometry;
pub mod scattering;
pub mod utils;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use atoms::Crystal;
use geometry::ReflectionSet;
use scattering::Intensities;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// How the per-reflection reductions are executed
///
/// The kernels implement one contract under either strategy; parallel runs
/// may differ from serial ones in the last bits of floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExecutionStrategy {
    /// Plain sequential loops over the reflection index
    Sequential,
    /// Rayon parallel maps over the reflection index
    #[default]
    Parallel,
}

/// Experiment-level constants for one pattern evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    /// Incident wavelength in nm
    pub wavelength: f64,
    /// Global intensity weighting factor applied before normalization
    pub intensity_weight: f64,
    /// Extinction-model coefficient K
    pub extinction_k: f64,
    /// Extinction-model coefficient D (effective domain size)
    pub extinction_d: f64,
    /// Linear absorption coefficient
    pub absorption_coefficient: f64,
    /// Incidence/diffraction asymmetry angle in degrees
    pub asymmetry_angle: f64,
}

/// Per-reflection scattering quantities, parallel to the input reflection
/// list
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectionTable {
    /// Interplanar spacings in nm
    pub d_spacings: Vec<f64>,
    /// Bragg angles 2θ in degrees, NaN where disallowed
    pub two_theta: Vec<f64>,
    /// Geometric accessibility flags
    pub allowed: Vec<bool>,
    /// Weighted intensities scaled so the strongest reflection is 100
    pub normalized_intensity: Vec<f64>,
    /// Raw squared structure-factor magnitudes |F|²
    pub raw_intensity_sq: Vec<f64>,
    /// Primary-extinction correction factors
    pub extinction: Vec<f64>,
    /// Path-length absorption correction factors
    pub absorption: Vec<f64>,
}

/// The main entry point for a whole-powder-pattern evaluation
///
/// Chains the geometry, structure-factor and correction kernels over one
/// crystal/experiment pair and returns the full per-reflection table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wppf {
    strategy: ExecutionStrategy,
}

impl Wppf {
    /// Create a calculator with the default (parallel) strategy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with an explicit execution strategy
    pub fn with_strategy(strategy: ExecutionStrategy) -> Self {
        Self { strategy }
    }

    /// The configured execution strategy
    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    /// Evaluate every scattering quantity for one reflection list
    pub fn evaluate(
        &self,
        crystal: &Crystal,
        reflections: &ReflectionSet,
        experiment: &Experiment,
    ) -> anyhow::Result<ReflectionTable> {
        let d_spacings = geometry::d_spacings(crystal.metric(), reflections.hkls())
            .context("computing d-spacings")?;

        let angles = geometry::bragg_angles(&d_spacings, experiment.wavelength)
            .context("computing Bragg angles")?;

        let Intensities { normalized, raw } = scattering::structure_factors(
            crystal,
            reflections,
            experiment.wavelength,
            experiment.intensity_weight,
            self.strategy,
        )
        .context("computing structure factors")?;

        let extinction = corrections::extinction_factors(
            reflections.hkls(),
            &angles.two_theta,
            crystal.cell_volume(),
            experiment.wavelength,
            &raw,
            experiment.extinction_k,
            experiment.extinction_d,
            self.strategy,
        )
        .context("computing extinction factors")?;

        let absorption = corrections::absorption_factors(
            experiment.absorption_coefficient,
            &angles.two_theta,
            experiment.asymmetry_angle,
            experiment.wavelength,
            self.strategy,
        )
        .context("computing absorption factors")?;

        Ok(ReflectionTable {
            d_spacings,
            two_theta: angles.two_theta,
            allowed: angles.allowed,
            normalized_intensity: normalized,
            raw_intensity_sq: raw,
            extinction,
            absorption,
        })
    }
}
