//! Biome facet: categorical classification of columns from the climate
//! base fields sampled at sea level.

use std::sync::Arc;

use crate::biome::{BiomeId, ClimateTable};
use crate::climate::ClimateBaseField;
use crate::facet::{FacetProvider, FacetSet, Grid2};
use crate::facets::surface::SURFACE_BORDER;
use crate::region::Region3;

/// Per-column biome assignment.
pub struct BiomeFacet {
    grid: Grid2<BiomeId>,
}

impl BiomeFacet {
    /// Biome of the column at world `(x, z)`.
    pub fn get(&self, x: i32, z: i32) -> BiomeId {
        self.grid.get(x, z)
    }
}

/// Classifies columns by sampling temperature and humidity at sea level
/// and resolving them through a [`ClimateTable`].
///
/// The climate fields are injected at construction, so this provider has
/// no facet dependencies and can run first in the pipeline.
pub struct BiomeProvider {
    table: Arc<ClimateTable>,
    humidity: Arc<ClimateBaseField>,
    temperature: Arc<ClimateBaseField>,
    sea_level: i32,
}

impl BiomeProvider {
    /// Creates the provider from the climate table and base fields.
    pub fn new(
        table: Arc<ClimateTable>,
        humidity: Arc<ClimateBaseField>,
        temperature: Arc<ClimateBaseField>,
        sea_level: i32,
    ) -> Self {
        Self {
            table,
            humidity,
            temperature,
            sea_level,
        }
    }
}

impl FacetProvider for BiomeProvider {
    fn compute(&self, region: Region3, facets: &mut FacetSet) {
        let footprint = region.footprint().pad(SURFACE_BORDER);
        let grid = Grid2::from_fn(footprint, |column| {
            let temperature = self.temperature.get(column.x, self.sea_level, column.y);
            let humidity = self.humidity.get(column.x, self.sea_level, column.y);
            self.table.lookup(temperature, humidity)
        });
        facets.insert(BiomeFacet { grid });
    }
}
