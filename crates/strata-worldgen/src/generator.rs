//! The world generator orchestrator: owns the configuration, builds both
//! pipelines once, and dispatches per-chunk generation.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use strata_terrain::{
    LandscapeProvider, NoiseLandscape, TerrainDeformation, TerrainDeformationParams, seed,
};
use strata_voxel::Chunk;

use crate::biome::{BiomeRegistry, ClimateTable};
use crate::climate::ClimateSystem;
use crate::config::{ConfigError, GenerationConfig};
use crate::facet::FacetProvider;
use crate::facets::{
    BiomeProvider, HillinessProvider, HumidityProvider, SeaLevelProvider, SurfaceHeightProvider,
    SurfaceToDensityProvider, TemperatureProvider, TerrainVariationProvider,
};
use crate::pipeline::GenerationPipeline;
use crate::rasterize::{ChunkDecorator, FeatureGenerator};

/// Phase offset for the terrain-variation sub-seed.
const VARIATION_PHASE: u64 = 0x2545_F491_4F6C_DD1D;

/// Errors raised by chunk generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// `create_chunk` was called before `initialize` completed.
    #[error("world generator used before initialize()")]
    NotInitialized,
}

/// Owns the generation configuration and both pipelines.
///
/// Built once per world: construct with the caller-supplied pass lists,
/// call [`initialize`](Self::initialize) exactly once, then hand out
/// shared references for concurrent [`create_chunk`](Self::create_chunk)
/// calls on distinct chunks.
pub struct WorldGenerator {
    config: GenerationConfig,
    biomes: Arc<BiomeRegistry>,
    climate_table: Arc<ClimateTable>,
    pending_providers: Vec<Box<dyn FacetProvider>>,
    pending_decorators: Vec<Box<dyn ChunkDecorator>>,
    pending_features: Vec<Box<dyn FeatureGenerator>>,
    pipeline: Option<GenerationPipeline>,
}

impl WorldGenerator {
    /// Validates the configuration and stores the pipeline parts.
    ///
    /// `facet_providers` are appended after the built-in providers;
    /// `decorators` and `feature_generators` run in the given order.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any configuration invariant is violated.
    pub fn new(
        config: GenerationConfig,
        biomes: Arc<BiomeRegistry>,
        climate_table: Arc<ClimateTable>,
        facet_providers: Vec<Box<dyn FacetProvider>>,
        decorators: Vec<Box<dyn ChunkDecorator>>,
        feature_generators: Vec<Box<dyn FeatureGenerator>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            biomes,
            climate_table,
            pending_providers: facet_providers,
            pending_decorators: decorators,
            pending_features: feature_generators,
            pipeline: None,
        })
    }

    /// One-time setup: derives the numeric seed, constructs the landscape
    /// and climate fields, assembles the facet providers in their fixed
    /// order, seeds every pass, and freezes the pipeline.
    ///
    /// Must complete before any [`create_chunk`](Self::create_chunk) call.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if landscape construction rejects the
    /// configuration.
    pub fn initialize(&mut self) -> Result<(), ConfigError> {
        let world_seed = seed::world_seed(&self.config.seed);
        let sea_level = self.config.sea_level;
        let max_level = self.config.max_level;

        let landscape: Arc<dyn LandscapeProvider> = Arc::new(NoiseLandscape::new(
            &self.config.seed,
            sea_level,
            max_level,
            self.config.landscape_params(),
        )?);
        // Same sub-seed and params as the landscape's internal field, so the
        // hilliness facet and the height query agree column for column.
        let deformation = Arc::new(TerrainDeformation::new(TerrainDeformationParams {
            seed: seed::deformation_seed(world_seed),
            diversity: self.config.terrain_diversity,
            curve: Arc::clone(&self.config.terrain_curve),
        }));
        let climate = ClimateSystem::new(
            world_seed,
            sea_level,
            max_level,
            self.config.climate_diversity,
            Arc::clone(&self.config.humidity_curve),
            Arc::clone(&self.config.temperature_curve),
        );

        let mut providers: Vec<Box<dyn FacetProvider>> = vec![
            Box::new(BiomeProvider::new(
                Arc::clone(&self.climate_table),
                climate.humidity(),
                climate.temperature(),
                sea_level,
            )),
            Box::new(HillinessProvider::new(deformation)),
            Box::new(SurfaceHeightProvider::new(Arc::clone(&landscape))),
            Box::new(SurfaceToDensityProvider),
            Box::new(HumidityProvider::new(climate.humidity())),
            Box::new(TemperatureProvider::new(climate.temperature())),
            Box::new(TerrainVariationProvider::new(
                world_seed.wrapping_add(VARIATION_PHASE),
            )),
            Box::new(SeaLevelProvider::new(sea_level)),
        ];
        providers.append(&mut self.pending_providers);

        let mut decorators = std::mem::take(&mut self.pending_decorators);
        for decorator in &mut decorators {
            decorator.initialize_with_seed(&self.config.seed);
        }
        let mut features = std::mem::take(&mut self.pending_features);
        for feature in &mut features {
            feature.initialize_with_seed(&self.config.seed);
        }

        info!(
            seed = %self.config.seed,
            sea_level,
            max_level,
            decorators = decorators.len(),
            feature_generators = features.len(),
            biomes = self.biomes.len(),
            "world generator initialized"
        );

        self.pipeline = Some(GenerationPipeline::new(
            providers, decorators, features, landscape, sea_level,
        ));
        Ok(())
    }

    /// Computes the facets for the chunk's region, then runs every
    /// rasterization pass over the chunk.
    ///
    /// Safe to call from many threads on distinct chunks once
    /// [`initialize`](Self::initialize) has returned.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::NotInitialized`] if called before
    /// initialization.
    pub fn create_chunk(&self, chunk: &mut dyn Chunk) -> Result<(), GenerateError> {
        let pipeline = self.pipeline.as_ref().ok_or(GenerateError::NotInitialized)?;
        debug!(
            world_x = chunk.world_x(),
            world_z = chunk.world_z(),
            "generating chunk"
        );
        pipeline.generate(chunk);
        Ok(())
    }

    /// The landscape height query, once initialized.
    pub fn landscape(&self) -> Option<&Arc<dyn LandscapeProvider>> {
        self.pipeline.as_ref().map(GenerationPipeline::landscape)
    }

    /// The immutable configuration this world was built from.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// The biome registry this world classifies columns against.
    pub fn biomes(&self) -> &Arc<BiomeRegistry> {
        &self.biomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::sync::Arc;

    use strata_terrain::{IdentityCurve, PowerCurve};
    use strata_voxel::{ArrayChunk, BlockDef, BlockId, BlockRegistry};

    use crate::biome::{BiomeDef, ClimateRange};
    use crate::decorators::{BeachDecorator, GroundDecorator};
    use crate::features::FloraGenerator;
    use crate::rasterize::BlockTypeFilter;

    const SIZE_X: usize = 16;
    const SIZE_Y: usize = 240;
    const SIZE_Z: usize = 16;

    fn block(registry: &mut BlockRegistry, name: &str, solid: bool, liquid: bool) -> BlockId {
        registry
            .register(BlockDef {
                name: name.to_string(),
                solid,
                liquid,
            })
            .unwrap()
    }

    /// Full world setup: two biomes, ground + beach decorators, flora.
    ///
    /// The hilliness curve saturates at 1 so every height query is a
    /// single-sample scan, keeping whole-chunk generation fast.
    fn test_world(seed: &str) -> WorldGenerator {
        let mut blocks = BlockRegistry::new();
        let stone = block(&mut blocks, "stone", true, false);
        let dirt = block(&mut blocks, "dirt", true, false);
        let grass = block(&mut blocks, "grass", true, false);
        let sand = block(&mut blocks, "sand", true, false);
        let water = block(&mut blocks, "water", false, true);
        let shrub = block(&mut blocks, "shrub", false, false);

        let mut biomes = BiomeRegistry::new();
        let plains = biomes
            .register(BiomeDef {
                name: "plains".to_string(),
                surface_block: grass,
                subsurface_block: dirt,
                vegetation_density: 0.3,
            })
            .unwrap();
        let tundra = biomes
            .register(BiomeDef {
                name: "tundra".to_string(),
                surface_block: dirt,
                subsurface_block: dirt,
                vegetation_density: 0.02,
            })
            .unwrap();
        let biomes = Arc::new(biomes);

        let climate_table = Arc::new(ClimateTable {
            ranges: vec![ClimateRange {
                temperature_min: -20.0,
                temperature_max: 5.0,
                humidity_min: 0.0,
                humidity_max: 1.01,
                biome_id: tundra,
            }],
            fallback: plains,
        });

        let config = GenerationConfig {
            seed: seed.to_string(),
            terrain_curve: Arc::new(PowerCurve::new(0.0)),
            height_above_sea_curve: Arc::new(IdentityCurve),
            ..Default::default()
        };

        let decorators: Vec<Box<dyn ChunkDecorator>> = vec![
            Box::new(GroundDecorator::new(stone, water, Arc::clone(&biomes))),
            Box::new(BeachDecorator::new(
                Box::new(BlockTypeFilter::new(vec![dirt, grass])),
                sand,
                2,
                2,
            )),
        ];
        let features: Vec<Box<dyn FeatureGenerator>> =
            vec![Box::new(FloraGenerator::new(shrub, Arc::clone(&biomes)))];

        WorldGenerator::new(
            config,
            biomes,
            climate_table,
            Vec::new(),
            decorators,
            features,
        )
        .unwrap()
    }

    fn chunk_digest(chunk: &ArrayChunk) -> u64 {
        let mut hasher = DefaultHasher::new();
        for x in 0..SIZE_X {
            for y in 0..SIZE_Y {
                for z in 0..SIZE_Z {
                    chunk.get_block(x, y, z).0.hash(&mut hasher);
                }
            }
        }
        hasher.finish()
    }

    #[test]
    fn test_create_chunk_before_initialize_fails() {
        let world = test_world("uninit");
        let mut chunk = ArrayChunk::new(0, 0, SIZE_X, SIZE_Y, SIZE_Z);
        assert!(matches!(
            world.create_chunk(&mut chunk),
            Err(GenerateError::NotInitialized)
        ));
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = GenerationConfig {
            seed: "bad".to_string(),
            sea_level: 300,
            max_level: 220,
            ..Default::default()
        };
        let result = WorldGenerator::new(
            config,
            Arc::new(BiomeRegistry::new()),
            Arc::new(ClimateTable {
                ranges: Vec::new(),
                fallback: crate::biome::BiomeId(0),
            }),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        assert!(result.is_err(), "Sea level above max level must fail fast");
    }

    #[test]
    fn test_same_seed_generates_identical_chunks() {
        let mut world_a = test_world("deterministic");
        let mut world_b = test_world("deterministic");
        world_a.initialize().unwrap();
        world_b.initialize().unwrap();

        for &(wx, wz) in &[(0, 0), (16, 0), (-16, 48)] {
            let mut chunk_a = ArrayChunk::new(wx, wz, SIZE_X, SIZE_Y, SIZE_Z);
            let mut chunk_b = ArrayChunk::new(wx, wz, SIZE_X, SIZE_Y, SIZE_Z);
            world_a.create_chunk(&mut chunk_a).unwrap();
            world_b.create_chunk(&mut chunk_b).unwrap();
            assert_eq!(
                chunk_digest(&chunk_a),
                chunk_digest(&chunk_b),
                "Chunk ({wx}, {wz}) must be identical across generators"
            );
        }
    }

    #[test]
    fn test_different_seeds_generate_different_worlds() {
        let mut world_a = test_world("seed-a");
        let mut world_b = test_world("seed-b");
        world_a.initialize().unwrap();
        world_b.initialize().unwrap();

        let mut chunk_a = ArrayChunk::new(0, 0, SIZE_X, SIZE_Y, SIZE_Z);
        let mut chunk_b = ArrayChunk::new(0, 0, SIZE_X, SIZE_Y, SIZE_Z);
        world_a.create_chunk(&mut chunk_a).unwrap();
        world_b.create_chunk(&mut chunk_b).unwrap();
        assert_ne!(
            chunk_digest(&chunk_a),
            chunk_digest(&chunk_b),
            "Different seeds should diverge"
        );
    }

    #[test]
    fn test_generated_chunk_respects_sea_and_bounds() {
        let mut world = test_world("bounds");
        world.initialize().unwrap();

        let mut chunk = ArrayChunk::new(32, -64, SIZE_X, SIZE_Y, SIZE_Z);
        world.create_chunk(&mut chunk).unwrap();

        let landscape = world.landscape().unwrap();
        let sea_level = world.config().sea_level;
        let water = BlockId(5);

        for x in 0..SIZE_X {
            for z in 0..SIZE_Z {
                let pos = glam::IVec2::new(32 + x as i32, -64 + z as i32);
                let ground = landscape.height(pos);
                assert!(
                    (0..=world.config().max_level).contains(&ground),
                    "Ground {ground} escaped the configured bounds"
                );
                for y in 0..SIZE_Y {
                    let block = chunk.get_block(x, y, z);
                    if block == water {
                        assert!(
                            (y as i32) <= sea_level,
                            "Water above sea level at ({x}, {y}, {z})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_concurrent_chunk_generation_matches_sequential() {
        let mut world = test_world("threads");
        world.initialize().unwrap();
        let generator = Arc::new(world);

        let origins: Vec<(i32, i32)> = (0..4).map(|i| (i * 16, -i * 16)).collect();

        let sequential: Vec<u64> = origins
            .iter()
            .map(|&(wx, wz)| {
                let mut chunk = ArrayChunk::new(wx, wz, SIZE_X, SIZE_Y, SIZE_Z);
                generator.create_chunk(&mut chunk).unwrap();
                chunk_digest(&chunk)
            })
            .collect();

        let handles: Vec<_> = origins
            .iter()
            .map(|&(wx, wz)| {
                let generator = Arc::clone(&generator);
                std::thread::spawn(move || {
                    let mut chunk = ArrayChunk::new(wx, wz, SIZE_X, SIZE_Y, SIZE_Z);
                    generator.create_chunk(&mut chunk).unwrap();
                    chunk_digest(&chunk)
                })
            })
            .collect();

        for (handle, expected) in handles.into_iter().zip(sequential) {
            assert_eq!(
                handle.join().unwrap(),
                expected,
                "Concurrent generation must match sequential output"
            );
        }
    }
}
