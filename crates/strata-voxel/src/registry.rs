//! Block type registry: maps compact [`BlockId`] values to [`BlockDef`] metadata.
//!
//! The registry is built once during world setup. Air is always ID 0 so that
//! zero-initialized chunk memory represents empty space.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Compact identifier stored inside every block cell (2 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub u16);

/// The air block, pre-registered as ID 0 in every registry.
pub const AIR: BlockId = BlockId(0);

/// Full descriptor for a block type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockDef {
    /// Human-readable name (e.g. "stone", "sand", "water").
    pub name: String,
    /// Whether entities collide with this block.
    pub solid: bool,
    /// Whether the block behaves as a fluid (e.g. water).
    pub liquid: bool,
}

/// Errors that can occur during block type registration.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A type with the same name has already been registered.
    #[error("duplicate block type name: {0}")]
    DuplicateName(String),
    /// All 65 535 user-defined slots have been consumed.
    #[error("block registry is full (max 65536 types)")]
    RegistryFull,
}

/// Maps [`BlockId`] → [`BlockDef`] with O(1) lookup by index and
/// O(1) reverse lookup by name.
pub struct BlockRegistry {
    /// Dense array where `index == BlockId.0`.
    types: Vec<BlockDef>,
    /// Reverse lookup: name → ID.
    name_to_id: HashMap<String, BlockId>,
}

impl BlockRegistry {
    /// Creates a new registry with Air pre-registered as ID 0.
    pub fn new() -> Self {
        let air = BlockDef {
            name: "air".to_string(),
            solid: false,
            liquid: false,
        };

        let mut name_to_id = HashMap::new();
        name_to_id.insert(air.name.clone(), AIR);

        Self {
            types: vec![air],
            name_to_id,
        }
    }

    /// Registers a new block type, returning its assigned [`BlockId`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if a type with the same name
    /// exists, or [`RegistryError::RegistryFull`] if all IDs are taken.
    pub fn register(&mut self, def: BlockDef) -> Result<BlockId, RegistryError> {
        if self.name_to_id.contains_key(&def.name) {
            return Err(RegistryError::DuplicateName(def.name.clone()));
        }
        if self.types.len() > u16::MAX as usize {
            return Err(RegistryError::RegistryFull);
        }
        let id = BlockId(self.types.len() as u16);
        self.name_to_id.insert(def.name.clone(), id);
        self.types.push(def);
        Ok(id)
    }

    /// Returns the definition for the given block ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this registry.
    pub fn get(&self, id: BlockId) -> &BlockDef {
        &self.types[id.0 as usize]
    }

    /// Looks up a block ID by name.
    pub fn lookup_by_name(&self, name: &str) -> Option<BlockId> {
        self.name_to_id.get(name).copied()
    }

    /// Returns the number of registered block types, including air.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if only air is registered.
    pub fn is_empty(&self) -> bool {
        self.types.len() <= 1
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}
