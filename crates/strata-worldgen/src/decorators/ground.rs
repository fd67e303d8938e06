//! Base terrain fill: the first decorator in every pipeline.

use std::sync::Arc;

use glam::IVec2;
use strata_voxel::{BlockId, Chunk};

use crate::biome::BiomeRegistry;
use crate::facets::BiomeFacet;
use crate::rasterize::{ChunkDecorator, GenerationParameters};

/// Number of surface + subsurface layers capping a column.
const TOPSOIL_DEPTH: i32 = 3;

/// Fills every column with stone up to its elevation, caps dry columns
/// with the biome's surface and subsurface blocks, and floods underwater
/// columns up to sea level.
pub struct GroundDecorator {
    stone: BlockId,
    water: BlockId,
    biomes: Arc<BiomeRegistry>,
}

impl GroundDecorator {
    /// Creates the decorator from the filler blocks and the biome registry.
    pub fn new(stone: BlockId, water: BlockId, biomes: Arc<BiomeRegistry>) -> Self {
        Self {
            stone,
            water,
            biomes,
        }
    }
}

impl ChunkDecorator for GroundDecorator {
    fn initialize_with_seed(&mut self, _seed: &str) {}

    fn generate_in_chunk(&self, chunk: &mut dyn Chunk, params: &GenerationParameters<'_>) {
        let biome_facet = params.facets().require::<BiomeFacet>();
        let sea_level = params.sea_level();

        for x in 0..chunk.size_x() {
            for z in 0..chunk.size_z() {
                let world_x = chunk.world_x() + x as i32;
                let world_z = chunk.world_z() + z as i32;
                let ground = params.landscape().height(IVec2::new(world_x, world_z));
                let biome = self.biomes.get(biome_facet.get(world_x, world_z));

                let top = (ground.min(chunk.size_y() as i32 - 1)).max(0);
                for y in 0..=top {
                    let block = if y == ground && ground >= sea_level {
                        biome.surface_block
                    } else if y > ground - TOPSOIL_DEPTH {
                        biome.subsurface_block
                    } else {
                        self.stone
                    };
                    chunk.set_block(x, y as usize, z, block);
                }

                if ground < sea_level {
                    let ceiling = sea_level.min(chunk.size_y() as i32 - 1);
                    for y in (ground + 1)..=ceiling {
                        chunk.set_block(x, y as usize, z, self.water);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::BiomeDef;
    use crate::facet::{FacetProvider, FacetSet};
    use crate::facets::{BiomeProvider, SurfaceHeightProvider};
    use crate::biome::ClimateTable;
    use crate::climate::ClimateSystem;
    use crate::region::Region3;
    use strata_terrain::{IdentityCurve, LandscapeProvider};
    use strata_voxel::{AIR, ArrayChunk};

    struct SlopedLandscape;

    impl LandscapeProvider for SlopedLandscape {
        fn height(&self, position: IVec2) -> i32 {
            // Columns x < 8 sit below sea level 32, the rest above.
            28 + position.x
        }
    }

    fn test_setup() -> (Arc<BiomeRegistry>, FacetSet, Arc<dyn LandscapeProvider>) {
        let mut registry = BiomeRegistry::new();
        let steppe = registry
            .register(BiomeDef {
                name: "steppe".to_string(),
                surface_block: BlockId(3),
                subsurface_block: BlockId(2),
                vegetation_density: 0.0,
            })
            .unwrap();
        let registry = Arc::new(registry);

        let landscape: Arc<dyn LandscapeProvider> = Arc::new(SlopedLandscape);
        let climate = ClimateSystem::new(
            1,
            32,
            220,
            0.0,
            Arc::new(IdentityCurve),
            Arc::new(IdentityCurve),
        );
        let table = Arc::new(ClimateTable {
            ranges: Vec::new(),
            fallback: steppe,
        });

        let region = Region3::for_chunk(0, 0, 16, 240, 16);
        let mut facets = FacetSet::new();
        BiomeProvider::new(table, climate.humidity(), climate.temperature(), 32)
            .compute(region, &mut facets);
        SurfaceHeightProvider::new(Arc::clone(&landscape)).compute(region, &mut facets);

        (registry, facets, landscape)
    }

    #[test]
    fn test_dry_column_gets_surface_cap_and_stone_core() {
        let (registry, facets, landscape) = test_setup();
        let params = GenerationParameters::new(landscape.as_ref(), 32, &facets);
        let decorator = GroundDecorator::new(BlockId(1), BlockId(4), registry);

        let mut chunk = ArrayChunk::new(0, 0, 16, 240, 16);
        decorator.generate_in_chunk(&mut chunk, &params);

        // Column x=10 has ground 38, above sea level.
        assert_eq!(chunk.get_block(10, 38, 0), BlockId(3), "Surface block on top");
        assert_eq!(chunk.get_block(10, 37, 0), BlockId(2), "Subsurface beneath");
        assert_eq!(chunk.get_block(10, 10, 0), BlockId(1), "Stone at depth");
        assert_eq!(chunk.get_block(10, 39, 0), AIR, "Air above the surface");
    }

    #[test]
    fn test_underwater_column_is_flooded_to_sea_level() {
        let (registry, facets, landscape) = test_setup();
        let params = GenerationParameters::new(landscape.as_ref(), 32, &facets);
        let decorator = GroundDecorator::new(BlockId(1), BlockId(4), registry);

        let mut chunk = ArrayChunk::new(0, 0, 16, 240, 16);
        decorator.generate_in_chunk(&mut chunk, &params);

        // Column x=0 has ground 28, below sea level 32.
        assert_eq!(chunk.get_block(0, 30, 0), BlockId(4), "Water above ground");
        assert_eq!(chunk.get_block(0, 32, 0), BlockId(4), "Water at sea level");
        assert_eq!(chunk.get_block(0, 33, 0), AIR, "Air above sea level");
        assert_ne!(
            chunk.get_block(0, 28, 0),
            BlockId(3),
            "Underwater ground must not grow a dry surface cap"
        );
    }
}
