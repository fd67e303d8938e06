//! Terrain-variation and sea-level marker facets.

use noise::{NoiseFn, Simplex};

use crate::facet::{FacetProvider, FacetSet, Grid2};
use crate::facets::surface::SURFACE_BORDER;
use crate::region::Region3;

/// Spatial frequency of the variation noise. High enough that adjacent
/// columns decorrelate, which is what block-choice jitter wants.
const VARIATION_FREQUENCY: f64 = 0.17;

/// Per-column variation scalar in `[0, 1]`, for block-choice jitter in
/// later passes.
pub struct TerrainVariationFacet {
    grid: Grid2<f64>,
}

impl TerrainVariationFacet {
    /// Variation at world column `(x, z)`.
    pub fn get(&self, x: i32, z: i32) -> f64 {
        self.grid.get(x, z)
    }
}

/// Produces the per-column variation facet from a dedicated noise field.
pub struct TerrainVariationProvider {
    noise: Simplex,
}

impl TerrainVariationProvider {
    /// Creates the provider from its sub-seed.
    pub fn new(seed: u64) -> Self {
        Self {
            noise: Simplex::new(seed as u32),
        }
    }
}

impl FacetProvider for TerrainVariationProvider {
    fn compute(&self, region: Region3, facets: &mut FacetSet) {
        let footprint = region.footprint().pad(SURFACE_BORDER);
        let grid = Grid2::from_fn(footprint, |column| {
            let raw = self.noise.get([
                column.x as f64 * VARIATION_FREQUENCY,
                column.y as f64 * VARIATION_FREQUENCY,
            ]);
            ((raw + 1.0) / 2.0).clamp(0.0, 1.0)
        });
        facets.insert(TerrainVariationFacet { grid });
    }
}

/// Region-constant marker carrying the configured sea level.
pub struct SeaLevelFacet {
    sea_level: i32,
}

impl SeaLevelFacet {
    /// The configured sea level.
    pub fn sea_level(&self) -> i32 {
        self.sea_level
    }
}

/// Publishes the sea level as a facet so passes and hosts that only see
/// the facet set still know where the water line is.
pub struct SeaLevelProvider {
    sea_level: i32,
}

impl SeaLevelProvider {
    /// Creates the provider for a fixed sea level.
    pub fn new(sea_level: i32) -> Self {
        Self { sea_level }
    }
}

impl FacetProvider for SeaLevelProvider {
    fn compute(&self, _region: Region3, facets: &mut FacetSet) {
        facets.insert(SeaLevelFacet {
            sea_level: self.sea_level,
        });
    }
}
