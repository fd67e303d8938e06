//! Pluggable world generation: facet pipeline, chunk rasterization passes,
//! climate base fields, and the orchestrating world generator.

mod biome;
mod climate;
mod config;
mod facet;
mod generator;
mod pipeline;
mod rasterize;
mod region;

pub mod decorators;
pub mod facets;
pub mod features;

pub use biome::{BiomeDef, BiomeError, BiomeId, BiomeRegistry, ClimateRange, ClimateTable};
pub use climate::{ClimateBaseField, ClimateSystem, HUMIDITY_RANGE, TEMPERATURE_RANGE};
pub use config::{ConfigError, GenerationConfig};
pub use facet::{FacetProvider, FacetSet, Grid2, Grid3};
pub use generator::{GenerateError, WorldGenerator};
pub use pipeline::GenerationPipeline;
pub use rasterize::{
    BlockFilter, BlockTypeFilter, ChunkDecorator, FeatureGenerator, GenerationParameters,
};
pub use region::{Border, Region2, Region3};
