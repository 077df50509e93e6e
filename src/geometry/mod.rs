/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Reciprocal-lattice geometry
//!
//! Converts reflection indices and a metric tensor into interplanar
//! spacings, and spacings plus a wavelength into Bragg angles with
//! geometric accessibility flags.

mod bragg;
pub mod errors;
mod metric;

pub use bragg::{bragg_angles, d_spacings, BraggAngles, ReflectionSet};
pub use errors::{GeometryError, Result};
pub use metric::{MetricTensor, UnitCell};
