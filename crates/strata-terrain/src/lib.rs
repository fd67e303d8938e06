//! Deterministic terrain elevation: fractal noise, response curves,
//! hilliness deformation, and the cached landscape height provider.

mod cache;
mod curve;
mod deformation;
mod fractal;
mod landscape;

pub mod seed;

pub use cache::HeightCache;
pub use curve::{IdentityCurve, PowerCurve, ResponseCurve, SmoothstepCurve};
pub use deformation::{TerrainDeformation, TerrainDeformationParams};
pub use fractal::{FractalNoise, FractalNoiseParams};
pub use landscape::{
    CACHE_SIZE, LandscapeError, LandscapeParams, LandscapeProvider, NoiseLandscape,
};
