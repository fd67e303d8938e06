//! Facet storage: immutable typed grids over padded regions, and the
//! per-region facet set that pipeline stages share.

use std::any::{Any, TypeId, type_name};

use glam::IVec2;
use hashbrown::HashMap;

use crate::region::{Region2, Region3};

/// An immutable 2D grid of per-column samples covering a padded region.
///
/// Samples are addressed by world coordinates; reading outside the covered
/// region is a pipeline-ordering bug and panics.
#[derive(Clone, Debug)]
pub struct Grid2<T> {
    region: Region2,
    data: Vec<T>,
}

impl<T: Copy> Grid2<T> {
    /// Fills the grid by evaluating `f` at every covered column.
    pub fn from_fn(region: Region2, mut f: impl FnMut(IVec2) -> T) -> Self {
        let mut data = Vec::with_capacity((region.width() * region.depth()) as usize);
        for column in region.columns() {
            data.push(f(column));
        }
        Self { region, data }
    }

    /// The covered (padded) region.
    pub fn region(&self) -> Region2 {
        self.region
    }

    /// Sample at world column `(x, z)`.
    ///
    /// # Panics
    ///
    /// Panics if the column lies outside the covered region.
    pub fn get(&self, x: i32, z: i32) -> T {
        assert!(
            self.region.contains(x, z),
            "column ({x}, {z}) outside facet region {:?}",
            self.region
        );
        let ix = x - self.region.min().x;
        let iz = z - self.region.min().y;
        self.data[(ix * self.region.depth() + iz) as usize]
    }
}

/// An immutable 3D grid of samples covering a padded region.
#[derive(Clone, Debug)]
pub struct Grid3<T> {
    region: Region3,
    data: Vec<T>,
}

impl<T: Copy> Grid3<T> {
    /// Fills the grid by evaluating `f` at every covered position.
    pub fn from_fn(region: Region3, mut f: impl FnMut(i32, i32, i32) -> T) -> Self {
        let size = region.max() - region.min();
        let mut data = Vec::with_capacity((size.x * size.y * size.z) as usize);
        for x in region.min().x..region.max().x {
            for z in region.min().z..region.max().z {
                for y in region.min().y..region.max().y {
                    data.push(f(x, y, z));
                }
            }
        }
        Self { region, data }
    }

    /// The covered (padded) region.
    pub fn region(&self) -> Region3 {
        self.region
    }

    /// Sample at world position `(x, y, z)`.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the covered region.
    pub fn get(&self, x: i32, y: i32, z: i32) -> T {
        assert!(
            self.region.contains(x, y, z),
            "position ({x}, {y}, {z}) outside facet region {:?}",
            self.region
        );
        let size = self.region.max() - self.region.min();
        let ix = x - self.region.min().x;
        let iy = y - self.region.min().y;
        let iz = z - self.region.min().z;
        self.data[((ix * size.z + iz) * size.y + iy) as usize]
    }
}

/// The shared per-region facet set, keyed by facet type.
///
/// Providers insert exactly one facet each, in pipeline order; later
/// providers and rasterization passes read earlier facets. Facets are
/// immutable once inserted.
#[derive(Default)]
pub struct FacetSet {
    facets: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl FacetSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a facet, replacing any previous facet of the same type.
    pub fn insert<F: Any + Send + Sync>(&mut self, facet: F) {
        self.facets.insert(TypeId::of::<F>(), Box::new(facet));
    }

    /// Returns the facet of type `F`, if a provider has produced it.
    pub fn get<F: Any + Send + Sync>(&self) -> Option<&F> {
        self.facets
            .get(&TypeId::of::<F>())
            .and_then(|facet| facet.downcast_ref::<F>())
    }

    /// Returns the facet of type `F`, which an earlier provider must have
    /// produced.
    ///
    /// # Panics
    ///
    /// Panics if no such facet exists; requesting a facet that runs later
    /// in the pipeline is a registration-order bug.
    pub fn require<F: Any + Send + Sync>(&self) -> &F {
        match self.get::<F>() {
            Some(facet) => facet,
            None => panic!(
                "facet {} requested before any provider produced it",
                type_name::<F>()
            ),
        }
    }

    /// Number of facets produced so far.
    pub fn len(&self) -> usize {
        self.facets.len()
    }

    /// Returns `true` if no facets have been produced.
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }
}

/// One stage of the facet pipeline.
///
/// `compute` must be pure given the region and the facets inserted by
/// earlier providers, so regions can be regenerated independently.
pub trait FacetProvider: Send + Sync {
    /// Computes this provider's facet for the (unpadded) chunk region and
    /// inserts it into `facets`.
    fn compute(&self, region: Region3, facets: &mut FacetSet);
}
