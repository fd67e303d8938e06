//! Biome definitions, registry, and the temperature/humidity lookup table
//! that classifies columns into biomes.

use hashbrown::HashMap;
use strata_voxel::BlockId;
use thiserror::Error;

/// Unique identifier for a biome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BiomeId(pub u16);

/// Errors that can occur when registering biomes.
#[derive(Debug, Error)]
pub enum BiomeError {
    /// A biome with this name is already registered.
    #[error("duplicate biome name: {0}")]
    DuplicateName(String),
}

/// Full descriptor for a biome type.
#[derive(Clone, Debug)]
pub struct BiomeDef {
    /// Human-readable biome name (e.g. "temperate_forest").
    pub name: String,
    /// Block placed on the terrain surface (e.g. grass, sand, snow).
    pub surface_block: BlockId,
    /// Block for the layers immediately below the surface.
    pub subsurface_block: BlockId,
    /// Probability of vegetation spawning per surface column, in `[0, 1]`.
    pub vegetation_density: f64,
}

/// Stores all registered biome definitions with O(1) lookup by ID.
pub struct BiomeRegistry {
    biomes: Vec<BiomeDef>,
    name_to_id: HashMap<String, BiomeId>,
}

impl BiomeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            biomes: Vec::new(),
            name_to_id: HashMap::new(),
        }
    }

    /// Registers a new biome definition, returning its assigned [`BiomeId`].
    ///
    /// # Errors
    ///
    /// Returns [`BiomeError::DuplicateName`] if a biome with the same name
    /// exists.
    pub fn register(&mut self, def: BiomeDef) -> Result<BiomeId, BiomeError> {
        if self.name_to_id.contains_key(&def.name) {
            return Err(BiomeError::DuplicateName(def.name.clone()));
        }
        let id = BiomeId(self.biomes.len() as u16);
        self.name_to_id.insert(def.name.clone(), id);
        self.biomes.push(def);
        Ok(id)
    }

    /// Returns the definition for the given biome ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn get(&self, id: BiomeId) -> &BiomeDef {
        &self.biomes[id.0 as usize]
    }

    /// Looks up a biome ID by name.
    pub fn lookup_by_name(&self, name: &str) -> Option<BiomeId> {
        self.name_to_id.get(name).copied()
    }

    /// Returns the number of registered biomes.
    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    /// Returns `true` if no biomes are registered.
    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }
}

impl Default for BiomeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A rectangle in climate space mapped to a biome.
///
/// Temperature is in degrees Celsius (the temperature base field's value
/// range); humidity is normalized to `[0, 1]`.
#[derive(Clone, Debug)]
pub struct ClimateRange {
    /// Minimum temperature (inclusive), °C.
    pub temperature_min: f64,
    /// Maximum temperature (exclusive), °C.
    pub temperature_max: f64,
    /// Minimum humidity (inclusive).
    pub humidity_min: f64,
    /// Maximum humidity (exclusive).
    pub humidity_max: f64,
    /// Biome assigned to columns within this rectangle.
    pub biome_id: BiomeId,
}

/// Ordered climate-space lookup: first matching rectangle wins.
pub struct ClimateTable {
    /// Ordered list of rectangles.
    pub ranges: Vec<ClimateRange>,
    /// Fallback biome when no rectangle matches.
    pub fallback: BiomeId,
}

impl ClimateTable {
    /// Looks up the biome for a temperature (°C) and humidity (`[0, 1]`).
    pub fn lookup(&self, temperature: f64, humidity: f64) -> BiomeId {
        for range in &self.ranges {
            if temperature >= range.temperature_min
                && temperature < range.temperature_max
                && humidity >= range.humidity_min
                && humidity < range.humidity_max
            {
                return range.biome_id;
            }
        }
        self.fallback
    }
}
