//! Density facet derived from the surface-height facet.

use crate::facet::{FacetProvider, FacetSet, Grid3};
use crate::facets::surface::SurfaceHeightFacet;
use crate::region::{Border, Region3};

/// Horizontal padding of the density facet. Stays within the surface
/// facet's wider border so every padded column has a height to read.
const DENSITY_BORDER: Border = Border {
    sides: 2,
    top: 0,
    bottom: 0,
};

/// Signed distance below the terrain surface: positive inside the ground,
/// negative in the air, crossing zero exactly at the surface.
pub struct DensityFacet {
    grid: Grid3<f64>,
}

impl DensityFacet {
    /// Density at world position `(x, y, z)`.
    pub fn get(&self, x: i32, y: i32, z: i32) -> f64 {
        self.grid.get(x, y, z)
    }
}

/// Converts the 2D surface-height facet into a 3D density facet.
///
/// Must run after [`SurfaceHeightProvider`](crate::facets::SurfaceHeightProvider).
pub struct SurfaceToDensityProvider;

impl FacetProvider for SurfaceToDensityProvider {
    fn compute(&self, region: Region3, facets: &mut FacetSet) {
        let padded = region.pad(DENSITY_BORDER);
        let grid = {
            let surface = facets.require::<SurfaceHeightFacet>();
            Grid3::from_fn(padded, |x, y, z| (surface.get(x, z) - y) as f64)
        };
        facets.insert(DensityFacet { grid });
    }
}
