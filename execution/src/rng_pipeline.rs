//! Seed-derived random streams.
//!
//! A task seed is expanded into independent ChaCha20 streams:
//! ```text
//! root = ChaCha20(seed)
//! keys = ChaCha20(root.next_u64())
//! text = ChaCha20(root.next_u64())
//! ```
//! The root stream is consumed exactly twice, in that order, so drawing more or fewer values from
//! one derived stream never shifts the other. Identical seeds give bit-identical streams.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// The derived streams for one task instance.
#[derive(Clone, Debug)]
pub struct SeedStreams {
    /// Drives the key shuffle.
    pub keys: ChaCha20Rng,
    /// Drives the plaintext generator.
    pub text: ChaCha20Rng,
}

impl SeedStreams {
    pub fn new(seed: u64) -> Self {
        let mut root = ChaCha20Rng::seed_from_u64(seed);
        let keys = ChaCha20Rng::seed_from_u64(root.next_u64());
        let text = ChaCha20Rng::seed_from_u64(root.next_u64());
        Self { keys, text }
    }
}
