//! The landscape height provider: disk-averaged fractal noise shaped by
//! sea-level and above-sea response curves, fronted by a bounded FIFO cache.

use std::sync::Arc;

use glam::IVec2;
use thiserror::Error;

use crate::cache::HeightCache;
use crate::curve::ResponseCurve;
use crate::deformation::{TerrainDeformation, TerrainDeformationParams};
use crate::fractal::{FractalNoise, FractalNoiseParams};
use crate::seed;

/// Resident-entry bound of the per-landscape height cache.
pub const CACHE_SIZE: usize = 10_000;

/// Maximum averaging radius, reached when hilliness is 0.
const MAX_SCAN_RADIUS: f64 = 50.0;

/// Point-query contract for terrain elevation.
///
/// Implementations must be deterministic per seed and safe to query from
/// many threads once constructed.
pub trait LandscapeProvider: Send + Sync {
    /// Elevation of the column at `position`, in `[0, max_level]`.
    fn height(&self, position: IVec2) -> i32;
}

/// Errors raised when landscape configuration is invalid.
#[derive(Debug, Error)]
pub enum LandscapeError {
    /// Sea level must satisfy `0 <= sea_level < max_level`.
    #[error("sea level {sea_level} must lie in [0, {max_level})")]
    SeaLevelOutOfRange { sea_level: i32, max_level: i32 },
    /// Sea frequency must lie in `[0, 1)`.
    #[error("sea frequency {0} must lie in [0, 1)")]
    SeaFrequencyOutOfRange(f64),
    /// Diversity scalars must be non-negative.
    #[error("terrain diversity {0} must be non-negative")]
    NegativeDiversity(f64),
}

/// Shape parameters for a [`NoiseLandscape`].
#[derive(Clone, Debug)]
pub struct LandscapeParams {
    /// Normalized-noise threshold below which a column is underwater.
    pub sea_frequency: f64,
    /// Spatial diversity of the hilliness field; 0 freezes it constant.
    pub terrain_diversity: f64,
    /// Response curve reshaping the hilliness field.
    pub terrain_curve: Arc<dyn ResponseCurve>,
    /// Response curve reshaping the above-sea elevation alpha.
    pub height_above_sea_curve: Arc<dyn ResponseCurve>,
}

impl Default for LandscapeParams {
    fn default() -> Self {
        Self {
            sea_frequency: 0.5,
            terrain_diversity: 0.5,
            terrain_curve: Arc::new(crate::curve::IdentityCurve),
            height_above_sea_curve: Arc::new(crate::curve::IdentityCurve),
        }
    }
}

impl LandscapeParams {
    /// Fail-fast validation of the numeric invariants.
    pub fn validate(&self) -> Result<(), LandscapeError> {
        if !(0.0..1.0).contains(&self.sea_frequency) {
            return Err(LandscapeError::SeaFrequencyOutOfRange(self.sea_frequency));
        }
        if self.terrain_diversity < 0.0 {
            return Err(LandscapeError::NegativeDiversity(self.terrain_diversity));
        }
        Ok(())
    }
}

/// Deterministic elevation field over world columns.
///
/// Each query averages the normalized fractal noise over a disk whose
/// radius shrinks as local hilliness grows (radius 0 degrades to a single
/// sample), then maps the averaged value through the sea threshold and the
/// above-sea response curve. Results are memoized in a bounded FIFO cache
/// so dependent passes re-querying the same column stay cheap.
pub struct NoiseLandscape {
    noise: FractalNoise,
    deformation: TerrainDeformation,
    sea_frequency: f64,
    height_above_sea_curve: Arc<dyn ResponseCurve>,
    sea_level: i32,
    max_level: i32,
    cache: HeightCache,
}

impl NoiseLandscape {
    /// Builds the landscape for a world seed string.
    ///
    /// This is the one-time initialization of the height field; it must
    /// complete before [`height`](LandscapeProvider::height) is called
    /// concurrently.
    ///
    /// # Errors
    ///
    /// Returns a [`LandscapeError`] if the elevation bounds or any of the
    /// shape parameters violate their invariants.
    pub fn new(
        seed: &str,
        sea_level: i32,
        max_level: i32,
        params: LandscapeParams,
    ) -> Result<Self, LandscapeError> {
        if sea_level < 0 || sea_level >= max_level {
            return Err(LandscapeError::SeaLevelOutOfRange {
                sea_level,
                max_level,
            });
        }
        params.validate()?;

        let world_seed = seed::world_seed(seed);
        let noise = FractalNoise::new(FractalNoiseParams {
            seed: world_seed,
            ..Default::default()
        });
        let deformation = TerrainDeformation::new(TerrainDeformationParams {
            seed: seed::deformation_seed(world_seed),
            diversity: params.terrain_diversity,
            curve: params.terrain_curve,
        });

        Ok(Self {
            noise,
            deformation,
            sea_frequency: params.sea_frequency,
            height_above_sea_curve: params.height_above_sea_curve,
            sea_level,
            max_level,
            cache: HeightCache::new(CACHE_SIZE),
        })
    }

    /// The configured sea level.
    pub fn sea_level(&self) -> i32 {
        self.sea_level
    }

    /// The configured maximum elevation.
    pub fn max_level(&self) -> i32 {
        self.max_level
    }

    /// Number of columns currently resident in the height cache.
    pub fn cached_columns(&self) -> usize {
        self.cache.len()
    }

    /// Average the normalized noise over the disk of lattice points around
    /// `(x, z)` whose radius is set by local hilliness, rescaled to `[0, 1]`.
    fn scan_noise(&self, hilliness: f64, x: i32, z: i32) -> f64 {
        let radius = ((1.0 - hilliness) * MAX_SCAN_RADIUS).round() as i32;
        let mut sum = 0.0;
        let mut samples = 0u32;
        for dx in -radius..=radius {
            let span = libm::sqrt((radius * radius - dx * dx) as f64) as i32;
            for dz in -span..=span {
                sum += self.noise.sample_normalized((x + dx) as f64, (z + dz) as f64);
                samples += 1;
            }
        }
        let average = sum / samples as f64;
        ((average + 1.0) / 2.0).clamp(0.0, 1.0)
    }

    /// Map averaged, normalized noise in `[0, 1]` to an integer elevation.
    ///
    /// Below the sea threshold the elevation ramps linearly from 0 to
    /// `sea_level`; above it the renormalized alpha passes through the
    /// configured response curve. The result is truncated, not rounded.
    fn elevation_from_noise(&self, normalized: f64) -> i32 {
        if normalized < self.sea_frequency {
            (self.sea_level as f64 * normalized / self.sea_frequency) as i32
        } else {
            let alpha = (normalized - self.sea_frequency) / (1.0 - self.sea_frequency);
            let shaped = self.height_above_sea_curve.apply(alpha);
            (self.sea_level as f64 + shaped * (self.max_level - self.sea_level) as f64) as i32
        }
    }
}

impl LandscapeProvider for NoiseLandscape {
    fn height(&self, position: IVec2) -> i32 {
        if let Some(cached) = self.cache.get(position) {
            return cached;
        }

        let hilliness = self.deformation.hilliness(position.x, position.y);
        let normalized = self.scan_noise(hilliness, position.x, position.y);
        let height = self.elevation_from_noise(normalized);

        self.cache.insert(position, height);
        height
    }
}
