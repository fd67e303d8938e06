//! Humidity and temperature facets: volumetric samples of the climate base
//! fields.

use std::sync::Arc;

use crate::climate::ClimateBaseField;
use crate::facet::{FacetProvider, FacetSet, Grid3};
use crate::region::Region3;

/// Per-position humidity in `[0, 1]`.
pub struct HumidityFacet {
    grid: Grid3<f64>,
}

impl HumidityFacet {
    /// Humidity at world position `(x, y, z)`.
    pub fn get(&self, x: i32, y: i32, z: i32) -> f64 {
        self.grid.get(x, y, z)
    }
}

/// Samples the humidity base field over the region.
pub struct HumidityProvider {
    field: Arc<ClimateBaseField>,
}

impl HumidityProvider {
    /// Creates the provider over the world's humidity field.
    pub fn new(field: Arc<ClimateBaseField>) -> Self {
        Self { field }
    }
}

impl FacetProvider for HumidityProvider {
    fn compute(&self, region: Region3, facets: &mut FacetSet) {
        let grid = Grid3::from_fn(region, |x, y, z| self.field.get(x, y, z));
        facets.insert(HumidityFacet { grid });
    }
}

/// Per-position temperature in degrees Celsius.
pub struct TemperatureFacet {
    grid: Grid3<f64>,
}

impl TemperatureFacet {
    /// Temperature at world position `(x, y, z)`.
    pub fn get(&self, x: i32, y: i32, z: i32) -> f64 {
        self.grid.get(x, y, z)
    }
}

/// Samples the temperature base field over the region.
pub struct TemperatureProvider {
    field: Arc<ClimateBaseField>,
}

impl TemperatureProvider {
    /// Creates the provider over the world's temperature field.
    pub fn new(field: Arc<ClimateBaseField>) -> Self {
        Self { field }
    }
}

impl FacetProvider for TemperatureProvider {
    fn compute(&self, region: Region3, facets: &mut FacetSet) {
        let grid = Grid3::from_fn(region, |x, y, z| self.field.get(x, y, z));
        facets.insert(TemperatureFacet { grid });
    }
}
