//! The built-in facet providers, in their pipeline registration order:
//! biome, hilliness, surface height, density, humidity, temperature,
//! terrain variation, sea level.

mod biome;
mod climate;
mod density;
mod surface;
mod variation;

pub use biome::{BiomeFacet, BiomeProvider};
pub use climate::{HumidityFacet, HumidityProvider, TemperatureFacet, TemperatureProvider};
pub use density::{DensityFacet, SurfaceToDensityProvider};
pub use surface::{
    HillinessFacet, HillinessProvider, SURFACE_BORDER, SurfaceHeightFacet, SurfaceHeightProvider,
};
pub use variation::{SeaLevelFacet, SeaLevelProvider, TerrainVariationFacet, TerrainVariationProvider};
