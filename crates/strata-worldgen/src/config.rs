//! World generation configuration: the immutable value the orchestrator is
//! built from.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strata_terrain::{IdentityCurve, LandscapeError, LandscapeParams, ResponseCurve};
use thiserror::Error;

/// Errors raised by [`GenerationConfig::validate`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An elevation or landscape-shape invariant was violated.
    #[error(transparent)]
    Landscape(#[from] LandscapeError),
    /// Climate diversity must be non-negative.
    #[error("climate diversity {0} must be non-negative")]
    NegativeClimateDiversity(f64),
}

fn identity_curve() -> Arc<dyn ResponseCurve> {
    Arc::new(IdentityCurve)
}

/// Global configuration for one generated world.
///
/// Constructed once at setup and immutable afterwards. The numeric fields
/// deserialize from host config files; the response curves are code and
/// default to identity when absent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// World seed string; hashed into the numeric seed at initialization.
    pub seed: String,
    /// Elevation of the sea surface. Must satisfy `0 <= sea_level < max_level`.
    pub sea_level: i32,
    /// Maximum elevation any column can reach.
    pub max_level: i32,
    /// Normalized-noise threshold below which columns are underwater; `[0, 1)`.
    pub sea_frequency: f64,
    /// Spatial diversity of the hilliness field; non-negative.
    pub terrain_diversity: f64,
    /// Spatial diversity of the climate fields; non-negative.
    pub climate_diversity: f64,
    /// Curve reshaping the hilliness field.
    #[serde(skip, default = "identity_curve")]
    pub terrain_curve: Arc<dyn ResponseCurve>,
    /// Curve reshaping the above-sea elevation alpha.
    #[serde(skip, default = "identity_curve")]
    pub height_above_sea_curve: Arc<dyn ResponseCurve>,
    /// Curve reshaping the humidity base field.
    #[serde(skip, default = "identity_curve")]
    pub humidity_curve: Arc<dyn ResponseCurve>,
    /// Curve reshaping the temperature base field.
    #[serde(skip, default = "identity_curve")]
    pub temperature_curve: Arc<dyn ResponseCurve>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: String::new(),
            sea_level: 32,
            max_level: 220,
            sea_frequency: 0.5,
            terrain_diversity: 0.5,
            climate_diversity: 0.5,
            terrain_curve: identity_curve(),
            height_above_sea_curve: identity_curve(),
            humidity_curve: identity_curve(),
            temperature_curve: identity_curve(),
        }
    }
}

impl GenerationConfig {
    /// Fail-fast validation of every configuration invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant; a config that passes here
    /// cannot fail later during generation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sea_level < 0 || self.sea_level >= self.max_level {
            return Err(LandscapeError::SeaLevelOutOfRange {
                sea_level: self.sea_level,
                max_level: self.max_level,
            }
            .into());
        }
        self.landscape_params().validate()?;
        if self.climate_diversity < 0.0 {
            return Err(ConfigError::NegativeClimateDiversity(self.climate_diversity));
        }
        Ok(())
    }

    /// The landscape-shape slice of this configuration.
    pub fn landscape_params(&self) -> LandscapeParams {
        LandscapeParams {
            sea_frequency: self.sea_frequency,
            terrain_diversity: self.terrain_diversity,
            terrain_curve: Arc::clone(&self.terrain_curve),
            height_above_sea_curve: Arc::clone(&self.height_above_sea_curve),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GenerationConfig {
            seed: "default".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sea_level_at_max_level_rejected() {
        let config = GenerationConfig {
            seed: "bad".to_string(),
            sea_level: 220,
            max_level: 220,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Landscape(
                LandscapeError::SeaLevelOutOfRange { .. }
            ))
        ));
    }

    #[test]
    fn test_sea_frequency_of_one_rejected() {
        let config = GenerationConfig {
            seed: "bad".to_string(),
            sea_frequency: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Landscape(
                LandscapeError::SeaFrequencyOutOfRange(_)
            ))
        ));
    }

    #[test]
    fn test_negative_climate_diversity_rejected() {
        let config = GenerationConfig {
            seed: "bad".to_string(),
            climate_diversity: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeClimateDiversity(_))
        ));
    }

    #[test]
    fn test_numeric_fields_deserialize_with_identity_curves() {
        let json = r#"{
            "seed": "from-file",
            "sea_level": 48,
            "max_level": 256,
            "sea_frequency": 0.4,
            "terrain_diversity": 1.0,
            "climate_diversity": 0.25
        }"#;
        let config: GenerationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.seed, "from-file");
        assert_eq!(config.sea_level, 48);
        assert!(config.validate().is_ok());
        // Skipped curve fields fall back to identity.
        assert_eq!(config.terrain_curve.apply(0.37), 0.37);
    }
}
