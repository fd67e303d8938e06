//! Vegetation placement on decorated terrain.

use std::sync::Arc;

use glam::IVec2;
use rand::Rng;
use strata_terrain::seed;
use strata_voxel::{AIR, BlockId, Chunk};

use crate::biome::BiomeRegistry;
use crate::facets::BiomeFacet;
use crate::rasterize::{FeatureGenerator, GenerationParameters};

/// Scatters plant blocks on dry surface columns.
///
/// Placement draws from a per-chunk RNG derived from the world seed and the
/// chunk origin, so a chunk's vegetation is identical no matter which thread
/// generates it or in what order chunks are requested. The per-column
/// probability is the biome's vegetation density.
pub struct FloraGenerator {
    plant: BlockId,
    biomes: Arc<BiomeRegistry>,
    world_seed: u64,
}

impl FloraGenerator {
    /// Creates the generator placing `plant` according to biome density.
    pub fn new(plant: BlockId, biomes: Arc<BiomeRegistry>) -> Self {
        Self {
            plant,
            biomes,
            world_seed: 0,
        }
    }
}

impl FeatureGenerator for FloraGenerator {
    fn initialize_with_seed(&mut self, seed: &str) {
        self.world_seed = seed::world_seed(seed);
    }

    fn generate_in_chunk(&self, chunk: &mut dyn Chunk, params: &GenerationParameters<'_>) {
        let biome_facet = params.facets().require::<BiomeFacet>();
        let sea_level = params.sea_level();
        let mut rng = seed::chunk_rng(self.world_seed, chunk.world_x(), chunk.world_z());

        for x in 0..chunk.size_x() {
            for z in 0..chunk.size_z() {
                // One draw per column, unconditionally, so the sequence
                // stays aligned with the column order.
                let roll = rng.random::<f64>();

                let world_x = chunk.world_x() + x as i32;
                let world_z = chunk.world_z() + z as i32;
                let ground = params.landscape().height(IVec2::new(world_x, world_z));
                if ground < sea_level || ground as usize + 1 >= chunk.size_y() {
                    continue;
                }

                let density = self
                    .biomes
                    .get(biome_facet.get(world_x, world_z))
                    .vegetation_density;
                if roll >= density {
                    continue;
                }

                let surface = chunk.get_block(x, ground as usize, z);
                let above = chunk.get_block(x, ground as usize + 1, z);
                if surface != AIR && above == AIR {
                    chunk.set_block(x, ground as usize + 1, z, self.plant);
                }
            }
        }
    }
}
