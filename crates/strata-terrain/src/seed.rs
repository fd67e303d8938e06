//! Deterministic seed derivation.
//!
//! The world seed arrives as a string; everything downstream needs a stable
//! numeric form. xxh3 is used instead of the standard library hasher because
//! its output is fixed across platforms and library versions, which keeps
//! worlds reproducible between builds.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use xxhash_rust::xxh3::xxh3_64;

/// Phase offset mixed into the world seed for the deformation field, so the
/// hilliness noise is decorrelated from the elevation noise.
const DEFORMATION_PHASE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Fold a seed string into a stable `u64` world seed.
pub fn world_seed(seed: &str) -> u64 {
    xxh3_64(seed.as_bytes())
}

/// Derive the deformation-field sub-seed from the world seed.
pub fn deformation_seed(world_seed: u64) -> u64 {
    world_seed.wrapping_add(DEFORMATION_PHASE)
}

/// Derive a deterministic RNG for the chunk anchored at `(world_x, world_z)`.
///
/// The returned RNG produces an identical sequence for the same
/// `(world_seed, world_x, world_z)` triple, regardless of thread or platform.
pub fn chunk_rng(world_seed: u64, world_x: i32, world_z: i32) -> ChaCha8Rng {
    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&world_seed.to_le_bytes());
    bytes[8..12].copy_from_slice(&world_x.to_le_bytes());
    bytes[12..].copy_from_slice(&world_z.to_le_bytes());
    ChaCha8Rng::seed_from_u64(xxh3_64(&bytes))
}
