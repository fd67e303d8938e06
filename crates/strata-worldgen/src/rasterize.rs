//! Chunk rasterization contracts: the narrow read-only view passes receive,
//! the decorator and feature-generator capabilities, and block filtering.

use strata_terrain::LandscapeProvider;
use strata_voxel::{BlockId, Chunk};

use crate::facet::FacetSet;

/// The read-only contract exposed to rasterization passes.
///
/// Passes see the landscape height query, the configured sea level, and the
/// facets already computed for the chunk's region; nothing else. This keeps
/// every pass runnable against any host that can supply these three things.
pub struct GenerationParameters<'a> {
    landscape: &'a dyn LandscapeProvider,
    sea_level: i32,
    facets: &'a FacetSet,
}

impl<'a> GenerationParameters<'a> {
    /// Assembles the pass contract for one chunk.
    pub fn new(landscape: &'a dyn LandscapeProvider, sea_level: i32, facets: &'a FacetSet) -> Self {
        Self {
            landscape,
            sea_level,
            facets,
        }
    }

    /// The landscape height query.
    pub fn landscape(&self) -> &dyn LandscapeProvider {
        self.landscape
    }

    /// The configured sea level.
    pub fn sea_level(&self) -> i32 {
        self.sea_level
    }

    /// The facets computed for this chunk's region.
    pub fn facets(&self) -> &FacetSet {
        self.facets
    }
}

/// A chunk-mutating pass that runs before any feature generator.
///
/// Decorators establish the base block structure of a chunk (ground fill,
/// beaches, caves); later passes read the blocks they leave behind.
pub trait ChunkDecorator: Send + Sync {
    /// Called once before any chunk is generated; establishes pass-local
    /// deterministic state from the world seed string.
    fn initialize_with_seed(&mut self, seed: &str);

    /// Mutates `chunk` in place. Runs once per chunk, in registration order.
    fn generate_in_chunk(&self, chunk: &mut dyn Chunk, params: &GenerationParameters<'_>);
}

/// A chunk-mutating pass that runs after all decorators.
///
/// Feature generators place discrete structures (vegetation, boulders) on
/// top of the decorated terrain.
pub trait FeatureGenerator: Send + Sync {
    /// Called once before any chunk is generated; establishes pass-local
    /// deterministic state from the world seed string.
    fn initialize_with_seed(&mut self, seed: &str);

    /// Mutates `chunk` in place. Runs once per chunk, in registration order.
    fn generate_in_chunk(&self, chunk: &mut dyn Chunk, params: &GenerationParameters<'_>);
}

/// Predicate over block types, used by passes that only replace certain
/// blocks.
pub trait BlockFilter: Send + Sync {
    /// Returns `true` if the pass may replace `block`.
    fn accepts(&self, block: BlockId) -> bool;
}

/// Accepts exactly the listed block types.
pub struct BlockTypeFilter {
    accepted: Vec<BlockId>,
}

impl BlockTypeFilter {
    /// Creates a filter accepting any of `accepted`.
    pub fn new(accepted: Vec<BlockId>) -> Self {
        Self { accepted }
    }
}

impl BlockFilter for BlockTypeFilter {
    fn accepts(&self, block: BlockId) -> bool {
        self.accepted.contains(&block)
    }
}
