//! Beach carving: replaces shoreline blocks with a beach material.

use glam::IVec2;
use strata_voxel::{BlockId, Chunk};

use crate::rasterize::{BlockFilter, ChunkDecorator, GenerationParameters};

/// Replaces filtered blocks with the beach block in a band around sea
/// level, for columns whose ground level lies within that band.
///
/// Must be registered before vegetation passes: flora reads the surface
/// blocks this decorator leaves behind.
pub struct BeachDecorator {
    filter: Box<dyn BlockFilter>,
    beach_block: BlockId,
    above_sea_level: i32,
    below_sea_level: i32,
}

impl BeachDecorator {
    /// Creates the decorator.
    ///
    /// The beach band spans `[sea_level - below_sea_level,
    /// sea_level + above_sea_level)`; only blocks accepted by `filter` are
    /// replaced.
    pub fn new(
        filter: Box<dyn BlockFilter>,
        beach_block: BlockId,
        above_sea_level: i32,
        below_sea_level: i32,
    ) -> Self {
        Self {
            filter,
            beach_block,
            above_sea_level,
            below_sea_level,
        }
    }
}

impl ChunkDecorator for BeachDecorator {
    fn initialize_with_seed(&mut self, _seed: &str) {}

    fn generate_in_chunk(&self, chunk: &mut dyn Chunk, params: &GenerationParameters<'_>) {
        let sea_level = params.sea_level();
        for x in 0..chunk.size_x() {
            for z in 0..chunk.size_z() {
                let world_x = chunk.world_x() + x as i32;
                let world_z = chunk.world_z() + z as i32;
                let ground = params.landscape().height(IVec2::new(world_x, world_z));

                if ground > sea_level + self.above_sea_level
                    || ground < sea_level - self.below_sea_level
                {
                    continue;
                }
                let band_bottom = (sea_level - self.below_sea_level).max(0);
                let band_top = (sea_level + self.above_sea_level).min(chunk.size_y() as i32);
                for y in band_bottom..band_top {
                    if self.filter.accepts(chunk.get_block(x, y as usize, z)) {
                        chunk.set_block(x, y as usize, z, self.beach_block);
                    }
                }
            }
        }
    }
}
