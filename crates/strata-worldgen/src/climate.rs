//! Climate base fields: seeded humidity and temperature point-sample fields
//! configured from response curves and the world's elevation bounds.
//!
//! Constructed explicitly by the orchestrator and handed to the providers
//! that need them; nothing here is looked up from ambient state.

use std::sync::Arc;

use noise::{NoiseFn, Simplex};
use strata_terrain::ResponseCurve;

/// Humidity values span this range.
pub const HUMIDITY_RANGE: (f64, f64) = (0.0, 1.0);
/// Temperature values span this range, in degrees Celsius.
pub const TEMPERATURE_RANGE: (f64, f64) = (-20.0, 40.0);

/// Base spatial frequency of the humidity field at diversity 1.
const HUMIDITY_FREQUENCY: f64 = 0.0007;
/// Base spatial frequency of the temperature field at diversity 1.
const TEMPERATURE_FREQUENCY: f64 = 0.0005;

/// Phase offsets decorrelating the two climate fields from the world seed.
const HUMIDITY_PHASE: u64 = 0xC2B2_AE3D_27D4_EB4F;
const TEMPERATURE_PHASE: u64 = 0x1656_67B1_9E37_79F9;

/// A pure, seeded point-sample field over world positions.
///
/// The horizontal pattern comes from simplex noise reshaped by a response
/// curve and mapped into the field's value range; altitude then attenuates
/// the value linearly from sea level down to the range minimum at the
/// world's maximum elevation.
pub struct ClimateBaseField {
    noise: Simplex,
    frequency: f64,
    curve: Arc<dyn ResponseCurve>,
    min_value: f64,
    max_value: f64,
    sea_level: i32,
    max_level: i32,
}

impl ClimateBaseField {
    fn new(
        seed: u64,
        frequency: f64,
        curve: Arc<dyn ResponseCurve>,
        value_range: (f64, f64),
        sea_level: i32,
        max_level: i32,
    ) -> Self {
        Self {
            noise: Simplex::new(seed as u32),
            frequency,
            curve,
            min_value: value_range.0,
            max_value: value_range.1,
            sea_level,
            max_level,
        }
    }

    /// Samples the field at a world position.
    pub fn get(&self, x: i32, y: i32, z: i32) -> f64 {
        let raw = self
            .noise
            .get([x as f64 * self.frequency, z as f64 * self.frequency]);
        let normalized = ((raw + 1.0) / 2.0).clamp(0.0, 1.0);
        let shaped = self.curve.apply(normalized);
        let base = self.min_value + shaped * (self.max_value - self.min_value);

        if y <= self.sea_level {
            return base;
        }
        let fade = (y - self.sea_level) as f64 / (self.max_level - self.sea_level) as f64;
        let fade = fade.clamp(0.0, 1.0);
        base - fade * (base - self.min_value)
    }

    /// The inclusive value range this field maps into.
    pub fn value_range(&self) -> (f64, f64) {
        (self.min_value, self.max_value)
    }
}

/// Owns the humidity and temperature base fields for one world.
pub struct ClimateSystem {
    humidity: Arc<ClimateBaseField>,
    temperature: Arc<ClimateBaseField>,
}

impl ClimateSystem {
    /// Configures both climate fields from the world seed, the elevation
    /// bounds, the climate diversity, and the two response curves.
    pub fn new(
        world_seed: u64,
        sea_level: i32,
        max_level: i32,
        diversity: f64,
        humidity_curve: Arc<dyn ResponseCurve>,
        temperature_curve: Arc<dyn ResponseCurve>,
    ) -> Self {
        let humidity = ClimateBaseField::new(
            world_seed.wrapping_add(HUMIDITY_PHASE),
            HUMIDITY_FREQUENCY * diversity,
            humidity_curve,
            HUMIDITY_RANGE,
            sea_level,
            max_level,
        );
        let temperature = ClimateBaseField::new(
            world_seed.wrapping_add(TEMPERATURE_PHASE),
            TEMPERATURE_FREQUENCY * diversity,
            temperature_curve,
            TEMPERATURE_RANGE,
            sea_level,
            max_level,
        );
        Self {
            humidity: Arc::new(humidity),
            temperature: Arc::new(temperature),
        }
    }

    /// The humidity base field, spanning [`HUMIDITY_RANGE`].
    pub fn humidity(&self) -> Arc<ClimateBaseField> {
        Arc::clone(&self.humidity)
    }

    /// The temperature base field, spanning [`TEMPERATURE_RANGE`].
    pub fn temperature(&self) -> Arc<ClimateBaseField> {
        Arc::clone(&self.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_terrain::IdentityCurve;

    fn system(seed: u64) -> ClimateSystem {
        ClimateSystem::new(
            seed,
            32,
            220,
            0.5,
            Arc::new(IdentityCurve),
            Arc::new(IdentityCurve),
        )
    }

    #[test]
    fn test_fields_are_deterministic_per_seed() {
        let a = system(42);
        let b = system(42);
        for i in -50..50 {
            assert_eq!(
                a.humidity().get(i * 11, 10, -i * 7),
                b.humidity().get(i * 11, 10, -i * 7)
            );
            assert_eq!(
                a.temperature().get(i * 11, 10, -i * 7),
                b.temperature().get(i * 11, 10, -i * 7)
            );
        }
    }

    #[test]
    fn test_humidity_and_temperature_are_decorrelated() {
        let system = system(7);
        let humidity = system.humidity();
        let temperature = system.temperature();
        let mut identical = 0;
        for i in 0..100 {
            let h = humidity.get(i * 19, 0, i * 23);
            // Normalize temperature back into [0, 1] for comparison.
            let (t_min, t_max) = temperature.value_range();
            let t = (temperature.get(i * 19, 0, i * 23) - t_min) / (t_max - t_min);
            if (h - t).abs() < 1e-9 {
                identical += 1;
            }
        }
        assert!(
            identical < 100,
            "Humidity and temperature fields must not be the same noise"
        );
    }

    #[test]
    fn test_values_stay_within_configured_range() {
        let system = system(99);
        let humidity = system.humidity();
        let temperature = system.temperature();
        for i in -200..200 {
            for &y in &[0, 32, 100, 220] {
                let h = humidity.get(i * 3, y, -i * 5);
                assert!(
                    (0.0..=1.0).contains(&h),
                    "Humidity {h} escaped its range at y={y}"
                );
                let t = temperature.get(i * 3, y, -i * 5);
                assert!(
                    (-20.0..=40.0).contains(&t),
                    "Temperature {t} escaped its range at y={y}"
                );
            }
        }
    }

    #[test]
    fn test_altitude_attenuates_toward_range_minimum() {
        let system = system(13);
        let temperature = system.temperature();
        let at_sea = temperature.get(500, 32, 500);
        let high = temperature.get(500, 200, 500);
        let at_ceiling = temperature.get(500, 220, 500);
        assert!(
            high <= at_sea,
            "Temperature must not rise with altitude: {at_sea} -> {high}"
        );
        assert!(
            (at_ceiling - TEMPERATURE_RANGE.0).abs() < 1e-9,
            "At the world ceiling the field must reach its minimum, got {at_ceiling}"
        );
    }

    #[test]
    fn test_below_sea_level_uses_base_value() {
        let system = system(21);
        let humidity = system.humidity();
        assert_eq!(
            humidity.get(10, 0, 10),
            humidity.get(10, 32, 10),
            "No altitude attenuation at or below sea level"
        );
    }
}
