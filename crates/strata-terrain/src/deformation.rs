//! Terrain deformation: the "hilliness" field.
//!
//! A second, independently seeded noise field that controls how sharply the
//! elevation noise is averaged at each column. Hilliness near 1 means sharp
//! local relief (small averaging radius); hilliness near 0 means smooth,
//! flat terrain (large radius).

use std::sync::Arc;

use noise::{NoiseFn, Simplex};

use crate::curve::ResponseCurve;

/// Base spatial frequency of the hilliness field at diversity 1.
const BASE_FREQUENCY: f64 = 0.001;

/// Defines a deformation field: sub-seed, diversity, and response curve.
#[derive(Clone, Debug)]
pub struct TerrainDeformationParams {
    /// Sub-seed for the hilliness noise, decorrelated from the terrain seed.
    pub seed: u64,
    /// Spatial diversity scalar. 0 freezes hilliness to a single constant
    /// value everywhere; larger values make it vary over shorter distances.
    pub diversity: f64,
    /// Curve reshaping the normalized hilliness sample.
    pub curve: Arc<dyn ResponseCurve>,
}

/// Samples the hilliness scalar in `[0, 1]` at world columns.
pub struct TerrainDeformation {
    noise: Simplex,
    frequency: f64,
    curve: Arc<dyn ResponseCurve>,
}

impl TerrainDeformation {
    /// Create the field from its parameters. `diversity` must be
    /// non-negative; validation happens at configuration time.
    pub fn new(params: TerrainDeformationParams) -> Self {
        Self {
            noise: Simplex::new(params.seed as u32),
            frequency: BASE_FREQUENCY * params.diversity,
            curve: params.curve,
        }
    }

    /// Hilliness at world column `(x, z)`, in `[0, 1]`.
    ///
    /// With diversity 0 every column collapses onto the field's origin
    /// sample, yielding a spatially constant value.
    pub fn hilliness(&self, x: i32, z: i32) -> f64 {
        let raw = self
            .noise
            .get([x as f64 * self.frequency, z as f64 * self.frequency]);
        let normalized = ((raw + 1.0) / 2.0).clamp(0.0, 1.0);
        self.curve.apply(normalized).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{IdentityCurve, PowerCurve};

    fn field(seed: u64, diversity: f64) -> TerrainDeformation {
        TerrainDeformation::new(TerrainDeformationParams {
            seed,
            diversity,
            curve: Arc::new(IdentityCurve),
        })
    }

    #[test]
    fn test_hilliness_stays_in_unit_interval() {
        let deformation = field(99, 2.5);
        for i in -500..500 {
            let h = deformation.hilliness(i * 7, i * -3);
            assert!(
                (0.0..=1.0).contains(&h),
                "Hilliness {h} escaped [0, 1] at index {i}"
            );
        }
    }

    #[test]
    fn test_zero_diversity_is_spatially_constant() {
        let deformation = field(7, 0.0);
        let base = deformation.hilliness(0, 0);
        for i in -100..100 {
            assert_eq!(
                deformation.hilliness(i * 1000, i * -777),
                base,
                "Diversity 0 must freeze hilliness everywhere"
            );
        }
    }

    #[test]
    fn test_determinism_across_instances() {
        let a = field(1234, 1.0);
        let b = field(1234, 1.0);
        for i in 0..200 {
            assert_eq!(a.hilliness(i, -i), b.hilliness(i, -i));
        }
    }

    #[test]
    fn test_curve_reshapes_field() {
        let identity = field(5, 1.0);
        let squared = TerrainDeformation::new(TerrainDeformationParams {
            seed: 5,
            diversity: 1.0,
            curve: Arc::new(PowerCurve::new(2.0)),
        });
        // For any sample strictly inside (0, 1), squaring lowers the value.
        let mut checked = 0;
        for i in 0..200 {
            let plain = identity.hilliness(i * 31, i * 17);
            if plain > 1e-6 && plain < 1.0 - 1e-6 {
                assert!(squared.hilliness(i * 31, i * 17) < plain);
                checked += 1;
            }
        }
        assert!(checked > 0, "No interior samples exercised the curve");
    }
}
