/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Crystal-structure aggregate consumed by the scattering kernels

use super::errors::{AtomError, Result};
use super::sites::{AsymmetricSites, ThermalParameters};
use super::types::{AtomType, DispersionTables};
use crate::geometry::{MetricTensor, UnitCell};

/// Immutable crystal-structure inputs for one pattern evaluation
///
/// Bundles the reciprocal metric, cell volume, atom-type tables, site
/// occupancies, thermal parameters and asymmetric-unit positions, with all
/// index-correspondence invariants checked once at construction. Instances
/// are read-only afterwards and safe to share across concurrent
/// evaluations.
#[derive(Debug, Clone)]
pub struct Crystal {
    metric: MetricTensor,
    cell_volume: f64,
    atom_types: Vec<AtomType>,
    dispersion: DispersionTables,
    occupancy: Vec<f64>,
    thermal: ThermalParameters,
    sites: AsymmetricSites,
}

impl Crystal {
    /// Assemble and validate a crystal structure
    ///
    /// # Arguments
    ///
    /// * `metric` - Reciprocal metric tensor in nm⁻²
    /// * `cell_volume` - Unit-cell volume in nm³
    /// * `atom_types` - One entry per distinct species, with dispersion curves
    /// * `occupancy` - Site-occupancy fraction per type, in [0, 1]
    /// * `thermal` - Isotropic or anisotropic thermal parameters per type
    /// * `sites` - Asymmetric-unit positions per type
    ///
    /// # Returns
    ///
    /// The validated structure, or the first violated invariant
    pub fn new(
        metric: MetricTensor,
        cell_volume: f64,
        atom_types: Vec<AtomType>,
        occupancy: Vec<f64>,
        thermal: ThermalParameters,
        sites: AsymmetricSites,
    ) -> Result<Self> {
        if atom_types.is_empty() {
            return Err(AtomError::NoAtomTypes);
        }
        if !(cell_volume > 0.0) || !cell_volume.is_finite() {
            return Err(AtomError::NonPositiveVolume(cell_volume));
        }

        let n = atom_types.len();
        for (what, got) in [
            ("occupancy", occupancy.len()),
            ("thermal parameters", thermal.type_count()),
            ("site lists", sites.type_count()),
        ] {
            if got != n {
                return Err(AtomError::TypeCountMismatch {
                    what,
                    expected: n,
                    got,
                });
            }
        }

        for (index, &value) in occupancy.iter().enumerate() {
            if !(0.0..=1.0).contains(&value) {
                return Err(AtomError::OccupancyOutOfRange { index, value });
            }
        }

        let dispersion = DispersionTables::from_atom_types(&atom_types)?;

        Ok(Self {
            metric,
            cell_volume,
            atom_types,
            dispersion,
            occupancy,
            thermal,
            sites,
        })
    }

    /// Assemble a crystal from lattice parameters instead of a raw metric
    pub fn from_unit_cell(
        cell: &UnitCell,
        atom_types: Vec<AtomType>,
        occupancy: Vec<f64>,
        thermal: ThermalParameters,
        sites: AsymmetricSites,
    ) -> Result<Self> {
        let metric = cell.reciprocal_metric()?;
        let volume = cell.volume()?;
        Self::new(metric, volume, atom_types, occupancy, thermal, sites)
    }

    /// Reciprocal metric tensor
    pub fn metric(&self) -> &MetricTensor {
        &self.metric
    }

    /// Unit-cell volume in nm³
    pub fn cell_volume(&self) -> f64 {
        self.cell_volume
    }

    /// Atom-type table
    pub fn atom_types(&self) -> &[AtomType] {
        &self.atom_types
    }

    /// Packed anomalous-dispersion curves
    pub fn dispersion(&self) -> &DispersionTables {
        &self.dispersion
    }

    /// Site-occupancy fractions, parallel to the atom-type table
    pub fn occupancy(&self) -> &[f64] {
        &self.occupancy
    }

    /// Thermal parameters, parallel to the atom-type table
    pub fn thermal(&self) -> &ThermalParameters {
        &self.thermal
    }

    /// Asymmetric-unit positions, parallel to the atom-type table
    pub fn sites(&self) -> &AsymmetricSites {
        &self.sites
    }

    /// Number of distinct atom types
    pub fn type_count(&self) -> usize {
        self.atom_types.len()
    }
}
