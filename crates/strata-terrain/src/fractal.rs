//! Multi-octave fractal Brownian motion (fBm) over 2D simplex noise.
//!
//! Composites several octaves of coherent noise at geometrically increasing
//! frequency and decreasing amplitude, and exposes the normalization scale
//! so callers can rescale samples into `[-1, 1]`.

use noise::{NoiseFn, Simplex};

/// Configuration for the multi-octave noise field.
#[derive(Clone, Debug)]
pub struct FractalNoiseParams {
    /// Seed for the underlying simplex permutation table.
    pub seed: u64,
    /// Number of octaves to composite. More octaves add finer detail.
    pub octaves: u32,
    /// Frequency multiplier between successive octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f64,
    /// Frequency of the first (lowest) octave, applied to world coordinates.
    pub base_frequency: f64,
}

impl Default for FractalNoiseParams {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 6,
            lacunarity: 2.0,
            persistence: 0.5,
            base_frequency: 0.004,
        }
    }
}

/// Seeded fBm sampler over world `(x, z)` coordinates.
///
/// Pure: the same `(seed, x, z)` always yields the same value. No caching
/// happens at this layer; callers cache derived results instead.
pub struct FractalNoise {
    noise: Simplex,
    params: FractalNoiseParams,
}

impl FractalNoise {
    /// Create a new sampler with the given parameters.
    pub fn new(params: FractalNoiseParams) -> Self {
        let noise = Simplex::new(params.seed as u32);
        Self { noise, params }
    }

    /// Sample the raw composite at a world coordinate.
    ///
    /// The theoretical range is `[-max_amplitude, +max_amplitude]`.
    pub fn sample(&self, x: f64, z: f64) -> f64 {
        let mut total = 0.0;
        let mut frequency = self.params.base_frequency;
        let mut amplitude = 1.0;

        for _ in 0..self.params.octaves {
            total += self.noise.get([x * frequency, z * frequency]) * amplitude;
            frequency *= self.params.lacunarity;
            amplitude *= self.params.persistence;
        }

        total
    }

    /// Sample rescaled into `[-1, 1]` via the normalization scale.
    pub fn sample_normalized(&self, x: f64, z: f64) -> f64 {
        self.sample(x, z) / self.max_amplitude()
    }

    /// Theoretical maximum absolute magnitude of [`sample`](Self::sample)
    /// (geometric series sum of the octave amplitudes).
    pub fn max_amplitude(&self) -> f64 {
        let mut sum = 0.0;
        let mut amp = 1.0;
        for _ in 0..self.params.octaves {
            sum += amp;
            amp *= self.params.persistence;
        }
        sum
    }

    /// Return a reference to the current parameters.
    pub fn params(&self) -> &FractalNoiseParams {
        &self.params
    }
}
