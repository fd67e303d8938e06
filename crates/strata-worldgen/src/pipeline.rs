//! Immutable composition of the facet and rasterization pipelines.

use std::sync::Arc;

use strata_terrain::LandscapeProvider;
use strata_voxel::Chunk;

use crate::facet::{FacetProvider, FacetSet};
use crate::rasterize::{ChunkDecorator, FeatureGenerator, GenerationParameters};
use crate::region::Region3;

/// The frozen pipeline value built once at initialization.
///
/// Registration order is part of the pipeline's identity: facet providers
/// run in order and may only read facets produced before them; decorators
/// all run before any feature generator.
pub struct GenerationPipeline {
    providers: Vec<Box<dyn FacetProvider>>,
    decorators: Vec<Box<dyn ChunkDecorator>>,
    features: Vec<Box<dyn FeatureGenerator>>,
    landscape: Arc<dyn LandscapeProvider>,
    sea_level: i32,
}

impl GenerationPipeline {
    /// Freezes the ordered stages into a pipeline.
    pub fn new(
        providers: Vec<Box<dyn FacetProvider>>,
        decorators: Vec<Box<dyn ChunkDecorator>>,
        features: Vec<Box<dyn FeatureGenerator>>,
        landscape: Arc<dyn LandscapeProvider>,
        sea_level: i32,
    ) -> Self {
        Self {
            providers,
            decorators,
            features,
            landscape,
            sea_level,
        }
    }

    /// The landscape the pipeline rasterizes against.
    pub fn landscape(&self) -> &Arc<dyn LandscapeProvider> {
        &self.landscape
    }

    /// Computes the chunk's facets, then runs every rasterization pass.
    ///
    /// Facets live only for the duration of this call; distinct chunks can
    /// be generated concurrently since all shared state is read-only or
    /// internally synchronized.
    pub fn generate(&self, chunk: &mut dyn Chunk) {
        let region = Region3::for_chunk(
            chunk.world_x(),
            chunk.world_z(),
            chunk.size_x() as i32,
            chunk.size_y() as i32,
            chunk.size_z() as i32,
        );

        let mut facets = FacetSet::new();
        for provider in &self.providers {
            provider.compute(region, &mut facets);
        }

        let params = GenerationParameters::new(self.landscape.as_ref(), self.sea_level, &facets);
        for decorator in &self.decorators {
            decorator.generate_in_chunk(chunk, &params);
        }
        for feature in &self.features {
            feature.generate_in_chunk(chunk, &params);
        }
    }
}
