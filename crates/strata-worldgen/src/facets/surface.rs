//! Hilliness and surface-height facets.

use std::sync::Arc;

use strata_terrain::{LandscapeProvider, TerrainDeformation};

use crate::facet::{FacetProvider, FacetSet, Grid2};
use crate::region::Region3;

/// Horizontal padding carried by the per-column facets so passes can read
/// columns just outside the chunk (tree canopies, beach edges).
pub const SURFACE_BORDER: i32 = 4;

/// Per-column hilliness in `[0, 1]`.
pub struct HillinessFacet {
    grid: Grid2<f64>,
}

impl HillinessFacet {
    /// Hilliness at world column `(x, z)`.
    pub fn get(&self, x: i32, z: i32) -> f64 {
        self.grid.get(x, z)
    }
}

/// Rasterizes the deformation field into a per-column facet.
pub struct HillinessProvider {
    deformation: Arc<TerrainDeformation>,
}

impl HillinessProvider {
    /// Creates the provider over the world's deformation field.
    pub fn new(deformation: Arc<TerrainDeformation>) -> Self {
        Self { deformation }
    }
}

impl FacetProvider for HillinessProvider {
    fn compute(&self, region: Region3, facets: &mut FacetSet) {
        let footprint = region.footprint().pad(SURFACE_BORDER);
        let grid = Grid2::from_fn(footprint, |column| {
            self.deformation.hilliness(column.x, column.y)
        });
        facets.insert(HillinessFacet { grid });
    }
}

/// Per-column terrain elevation.
pub struct SurfaceHeightFacet {
    grid: Grid2<i32>,
}

impl SurfaceHeightFacet {
    /// Elevation of the column at world `(x, z)`.
    pub fn get(&self, x: i32, z: i32) -> i32 {
        self.grid.get(x, z)
    }
}

/// Rasterizes the landscape height query into a per-column facet.
///
/// Every sample goes through the landscape's height cache, so the facet
/// and any pass querying the same columns directly agree by construction.
pub struct SurfaceHeightProvider {
    landscape: Arc<dyn LandscapeProvider>,
}

impl SurfaceHeightProvider {
    /// Creates the provider over the world's landscape.
    pub fn new(landscape: Arc<dyn LandscapeProvider>) -> Self {
        Self { landscape }
    }
}

impl FacetProvider for SurfaceHeightProvider {
    fn compute(&self, region: Region3, facets: &mut FacetSet) {
        let footprint = region.footprint().pad(SURFACE_BORDER);
        let grid = Grid2::from_fn(footprint, |column| self.landscape.height(column));
        facets.insert(SurfaceHeightFacet { grid });
    }
}
